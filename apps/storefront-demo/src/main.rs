mod session;

use session::Session;
use storefront_ui::ScrollDirection;
use web_time::{Duration, Instant};

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let started = Instant::now();
    let mut session = Session::new(
        vec![
            "Free shipping on orders over $50".to_owned(),
            "New arrivals every Friday".to_owned(),
            "Members save 10%".to_owned(),
        ],
        Duration::from_millis(3_000),
    )?;

    session.fling(900.0, 600.0, 6);
    let frames = session.settle(600);
    log::info!("glide settled after {frames} frames at {:.1}", session.offset());

    session.step(ScrollDirection::Right);
    let frames = session.settle(120);
    log::info!("step right settled after {frames} frames at {:.1}", session.offset());

    session.fling(300.0, 500.0, 4);
    let frames = session.settle(600);
    log::info!("glide back settled after {frames} frames at {:.1}", session.offset());

    session.step(ScrollDirection::Left);
    session.settle(120);
    session.idle(Duration::from_secs(7));

    log::info!(
        "simulated session finished at offset {:.1} in {:?}",
        session.offset(),
        started.elapsed()
    );
    Ok(())
}
