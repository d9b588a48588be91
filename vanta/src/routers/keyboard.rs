use iced::Task;
use iced::keyboard::{self, Key, Modifiers, key};
use vanta_nav::SectionId;

use crate::app::AppEvent;

/// Translate key presses into app events.
pub(crate) fn route(event: keyboard::Event) -> Task<AppEvent> {
    if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
        if let Some(event) = shortcut(&key, modifiers) {
            return Task::done(event);
        }
    }
    Task::none()
}

/// Escape closes the overlay, Alt+Left/Right walk the history and
/// Command+1..8 jump to the section at that menu position.
fn shortcut(key: &Key, modifiers: Modifiers) -> Option<AppEvent> {
    match key {
        Key::Named(key::Named::Escape) => Some(AppEvent::CloseSidebar),
        Key::Named(key::Named::ArrowLeft) if modifiers.alt() => {
            Some(AppEvent::HistoryBack)
        },
        Key::Named(key::Named::ArrowRight) if modifiers.alt() => {
            Some(AppEvent::HistoryForward)
        },
        Key::Character(c) if modifiers.command() => {
            let position = c.as_str().parse::<usize>().ok()?;
            let section = SectionId::from_ordinal(position.checked_sub(1)?)?;
            Some(AppEvent::RequestSection(section))
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use iced::keyboard::{Key, Modifiers, key};
    use vanta_nav::SectionId;

    use super::shortcut;
    use crate::app::AppEvent;

    #[test]
    fn given_escape_when_pressed_then_overlay_closes() {
        let event = shortcut(&Key::Named(key::Named::Escape), Modifiers::empty());

        assert!(matches!(event, Some(AppEvent::CloseSidebar)));
    }

    #[test]
    fn given_command_digit_when_pressed_then_section_at_position_is_requested()
    {
        let event = shortcut(&Key::Character("5".into()), Modifiers::COMMAND);

        assert!(matches!(
            event,
            Some(AppEvent::RequestSection(SectionId::Protection))
        ));
    }

    #[test]
    fn given_out_of_range_digit_when_pressed_then_nothing_happens() {
        for digit in ["0", "9"] {
            let event = shortcut(&Key::Character(digit.into()), Modifiers::COMMAND);
            assert!(event.is_none());
        }
    }

    #[test]
    fn given_plain_digit_when_pressed_then_nothing_happens() {
        let event = shortcut(&Key::Character("2".into()), Modifiers::empty());

        assert!(event.is_none());
    }

    #[test]
    fn given_alt_arrows_when_pressed_then_history_moves() {
        let back = shortcut(&Key::Named(key::Named::ArrowLeft), Modifiers::ALT);
        let forward =
            shortcut(&Key::Named(key::Named::ArrowRight), Modifiers::ALT);

        assert!(matches!(back, Some(AppEvent::HistoryBack)));
        assert!(matches!(forward, Some(AppEvent::HistoryForward)));
    }
}
