use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::info;

use crate::api::ApiClient;
use crate::session::AuthContext;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::i18n::Language;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::route::Route;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_worker;

/// Settings the UI loop needs from the loaded config and CLI.
#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub language: Language,
    pub initial_route: Route,
}

/// Run the interactive UI until the user quits.
///
/// API calls run on `handle`; this thread only draws and reacts to events.
pub fn run(
    options: UiOptions,
    auth: AuthContext,
    client: ApiClient,
    handle: &Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = options.tick_rate;
    let events = EventHandler::new(tick_rate);
    let requests = spawn_worker(handle, client, events.sender());

    let mut app = App::new(options.language, auth);
    app.attach_requests(requests);
    app.navigate(options.initial_route);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Api(event)) => app.on_api_event(event),
            // Redraw on the next iteration
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(_, _)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    info!("ui loop finished");
    drop(guard);
    Ok(())
}
