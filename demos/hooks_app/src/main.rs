use anyhow::Context;
use hookbox_core::timer;
use hookbox_core::{DocumentTitle, TitleSink};
use hookbox_ui::Host;
use hooks_app::{App, AppConfig, AppEnv};

/// Mounts the page headlessly, plays a short scripted session against it,
/// then waits for the title timer and unmounts.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    log::info!("starting with {config:?}");
    let env = AppEnv::default();

    let mut host = Host::new(move || App(&env, &config));
    host.mount().context("mounting the page")?;
    println!("{}\n", host.dump());

    host.click_button("increment")?;
    host.click_button("decrement")?;
    host.input("Name", "Mr. Kim")?;
    host.input("Name", "kim@example.com")?;
    host.click_button("Section 2")?;
    host.click_button("a")?;
    host.click_button("b")?;

    println!("title: {}", DocumentTitle.title());
    while let Some(deadline) = timer::next_deadline() {
        let wait = deadline.saturating_duration_since(timer::now());
        std::thread::sleep(wait);
        host.tick().context("delivering timers")?;
    }
    println!("title: {}\n", DocumentTitle.title());
    println!("{}", host.dump());

    host.unmount();
    Ok(())
}
