//! PingPong Physics demo
//!
//! Runs a headless rally on a 160x144 screen: the ball bounces off the
//! walls and ceiling while a paddle at the bottom chases it. Pass a JSON
//! settings file as the first argument to override the defaults.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use pingpong_physics::consts::*;
    use pingpong_physics::sim::Wall;
    use pingpong_physics::{Fixed, PingPongScene, Settings};

    /// Frames to simulate (20 seconds at 60 Hz)
    const DEMO_TICKS: u32 = 1200;
    /// Paddle top edge row
    const PADDLE_Y: u8 = SCREEN_HEIGHT - 12;
    /// Paddle chase speed (pixels per frame)
    const PADDLE_SPEED: u8 = 1;
    /// How far past an edge the ball may overshoot in one frame
    const EDGE_SLACK: u8 = 16;

    #[derive(Debug, Default)]
    struct RallyStats {
        paddle_hits: u32,
        misses: u32,
        wall_bounces: u32,
        ceiling_bounces: u32,
    }

    /// Whether a coordinate moving with `vel` has crossed an edge of `0..limit`.
    /// Pixel space wraps, so overshooting the low edge shows up near 255.
    fn crossed_edge(pos: u8, vel: Fixed, limit: u8) -> bool {
        if vel < Fixed::ZERO {
            pos == 0 || pos > u8::MAX - EDGE_SLACK
        } else if vel > Fixed::ZERO {
            pos >= limit - 1 && pos <= limit.saturating_add(EDGE_SLACK)
        } else {
            false
        }
    }

    fn step_toward(from: u8, to: u8) -> u8 {
        if from < to {
            from + (to - from).min(PADDLE_SPEED)
        } else {
            from - (from - to).min(PADDLE_SPEED)
        }
    }

    pub fn run() {
        let settings = match std::env::args().nth(1) {
            Some(path) => match Settings::load_from_path(&path) {
                Ok(settings) => settings,
                Err(e) => {
                    log::error!("{e}");
                    std::process::exit(1);
                }
            },
            None => {
                log::info!("Using default settings");
                Settings::default()
            }
        };
        log::info!("{settings:?}");

        let mut scene = PingPongScene::new(settings);
        scene.on_scene_enter();
        scene.init(DEFAULT_BALL_X, DEFAULT_BALL_Y, DEFAULT_LAUNCH_ANGLE);

        let half_width = (settings.paddle_width / 2).min(SCREEN_WIDTH / 2 - 1);
        let mut paddle_x = SCREEN_WIDTH / 2;
        let mut stats = RallyStats::default();

        for frame in 0..DEMO_TICKS {
            scene.on_scene_tick();
            let (x, y) = scene.update();
            let vel = scene.ball().vel();

            if crossed_edge(x, vel.x, SCREEN_WIDTH) {
                scene.reflect_wall(Wall::Vertical);
                stats.wall_bounces += 1;
            }
            if vel.y < Fixed::ZERO && crossed_edge(y, vel.y, SCREEN_HEIGHT) {
                scene.reflect_wall(Wall::Horizontal);
                stats.ceiling_bounces += 1;
            }

            // Chase the ball, keeping the paddle on screen
            let target = x.clamp(half_width, SCREEN_WIDTH - 1 - half_width);
            paddle_x = step_toward(paddle_x, target);

            if vel.y > Fixed::ZERO && scene.paddle_reflect(paddle_x, PADDLE_Y) {
                stats.paddle_hits += 1;
                log::debug!(
                    "Frame {frame}: hit at x={x} paddle={paddle_x} angle={}",
                    scene.ball().angle()
                );
            } else if vel.y > Fixed::ZERO && y > PADDLE_Y + 8 && y < u8::MAX - EDGE_SLACK {
                stats.misses += 1;
                log::info!("Frame {frame}: missed at x={x} paddle={paddle_x}, serving again");
                scene.init(DEFAULT_BALL_X, DEFAULT_BALL_Y, DEFAULT_LAUNCH_ANGLE);
            }
        }

        log::info!("Rally finished after {DEMO_TICKS} frames: {stats:?}");
        println!(
            "hits={} misses={} wall_bounces={} ceiling_bounces={}",
            stats.paddle_hits, stats.misses, stats.wall_bounces, stats.ceiling_bounces
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("PingPong Physics (native) starting...");
    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is `web::start`, this is just to satisfy the compiler
}
