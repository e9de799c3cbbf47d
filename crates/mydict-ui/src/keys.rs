use mydict_types::{Key, KeyPress};
use slint::platform::Key as SlintKey;

/// Translate a slint key event into a `KeyPress`
pub fn key_press(text: &str, ctrl: bool, shift: bool, alt: bool) -> Option<KeyPress> {
    let mut chars = text.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    let key = if c == char::from(SlintKey::UpArrow) {
        Key::Up
    } else if c == char::from(SlintKey::DownArrow) {
        Key::Down
    } else if c == char::from(SlintKey::Escape) {
        Key::Escape
    } else if c == char::from(SlintKey::Return) && !ctrl {
        Key::Enter
    } else if ctrl && ('\u{1}'..='\u{1a}').contains(&c) {
        // Some backends report Ctrl+letter as the ASCII control code
        Key::Char((b'a' + (c as u8 - 1)) as char)
    } else if c.is_control() {
        return None;
    } else {
        Key::Char(c)
    };

    Some(KeyPress {
        key,
        ctrl,
        shift,
        alt,
    })
}

pub fn enter() -> KeyPress {
    KeyPress::plain(Key::Enter)
}

/// Keys the backend wants to see: navigation plus modifier chords
pub fn is_forwarded(press: KeyPress) -> bool {
    matches!(press.key, Key::Up | Key::Down | Key::Escape) || press.ctrl || press.alt
}

/// Keys kept away from the text field
pub fn is_consumed(press: KeyPress) -> bool {
    matches!(press.key, Key::Up | Key::Down | Key::Escape)
}
