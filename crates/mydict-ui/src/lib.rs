use mydict_config::ui::UiConfig;
use mydict_types::UiEvent;
use slint::ComponentHandle;

pub mod bridge;
pub mod cards;
pub mod clipboard;
pub mod events;
pub mod keys;

pub use bridge::UiBridge;

slint::include_modules!();

/// Run the search window on the current thread until it is closed
pub fn ui_loop(config: &UiConfig, bridge: UiBridge) -> anyhow::Result<()> {
    let window = SearchWindow::new()?;
    window.set_window_title(config.window_title.as_str().into());
    window.set_shimmer_rows(config.shimmer_rows as i32);

    {
        let bridge = bridge.clone();
        window.on_search_edited(move |text| {
            bridge.send(UiEvent::SearchText(text.to_string()));
        });
    }

    {
        let bridge = bridge.clone();
        window.on_enter_pressed(move || {
            bridge.send(UiEvent::KeyPressed(keys::enter()));
        });
    }

    {
        let bridge = bridge.clone();
        window.on_key_pressed(move |text, ctrl, shift, alt| {
            let Some(press) = keys::key_press(&text, ctrl, shift, alt) else {
                return false;
            };
            if keys::is_forwarded(press) {
                bridge.send(UiEvent::KeyPressed(press));
            }
            keys::is_consumed(press)
        });
    }

    {
        let bridge = bridge.clone();
        window.on_card_clicked(move |index| {
            if let Ok(index) = usize::try_from(index) {
                bridge.send(UiEvent::SelectResult(index));
            }
        });
    }

    {
        let bridge = bridge.clone();
        window.on_back_clicked(move || {
            bridge.send(UiEvent::CloseDetail);
        });
    }

    window.on_copy_audio(move |url| match clipboard::copy_text(&url) {
        Ok(()) => tracing::info!("[SLINT] Copied audio link"),
        Err(e) => tracing::warn!("[SLINT] Failed to copy audio link: {}", e),
    });

    bridge.forward_from_backend(window.as_weak())?;

    window.show()?;
    bridge.send(UiEvent::Mounted);
    tracing::info!("[SLINT] Search window mounted");

    slint::run_event_loop()?;

    window.hide()?;
    // The event loop is gone, so this one cannot go through spawn_local
    if !bridge.try_send(UiEvent::Unmounted) {
        tracing::warn!("[SLINT] Could not deliver unmount notification");
    }
    tracing::info!("[SLINT] Search window closed");

    Ok(())
}
