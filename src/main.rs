//! Lumen Editor entry point
//!
//! There is no window here: the binary loads settings, plays a seeded demo
//! session against the editor core and prints the final frame as JSON.
//! Set `LUMEN_SETTINGS` to a JSON file to override the defaults.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lumen Editor (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts on wasm32 drive `EditorSession` directly
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), lumen_editor::EditorError> {
    use lumen_editor::Settings;
    use lumen_editor::demo::DemoScript;
    use lumen_editor::sim::EditorSession;

    let settings = Settings::load();
    let mut session = EditorSession::new(&settings)?;

    let edits = DemoScript::new(settings.demo_seed).run(&mut session, settings.demo_steps);
    log::info!(
        "Demo finished: {} edit(s) over {} gesture(s)",
        edits.len(),
        settings.demo_steps
    );

    let frame = session.frame();
    log::info!(
        "Final frame: {} shape(s), {}/{} rays blocked",
        frame.shapes.len(),
        frame.hit_count(),
        frame.rays.len()
    );

    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}
