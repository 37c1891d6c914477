use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use slidepanel::cli::CliArgs;
use slidepanel::PanelConfig;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    slidepanel::tracing::init();

    let args = CliArgs::parse();
    let mut config = PanelConfig::load();
    args.apply_to(&mut config);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, args.initial_state());

    event_loop.run_app(&mut app)?;

    Ok(())
}
