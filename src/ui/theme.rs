use fltk::{
    button::Button,
    enums::Color,
    frame::Frame,
    misc::HelpView,
    prelude::*,
    text::TextEditor,
    window::Window,
};

pub fn apply_theme(
    editor: &mut TextEditor,
    window: &mut Window,
    toolbar_buttons: &mut [Button],
    panel_view: &mut HelpView,
    banner: &mut Frame,
    is_dark: bool,
) {
    if is_dark {
        // Night colors
        editor.set_color(Color::from_rgb(30, 30, 30));
        editor.set_text_color(Color::from_rgb(220, 220, 220));
        editor.set_cursor_color(Color::from_rgb(255, 255, 255));
        editor.set_selection_color(Color::from_rgb(70, 70, 100));
        window.set_color(Color::from_rgb(25, 25, 25));
        window.set_label_color(Color::from_rgb(220, 220, 220));
        for button in toolbar_buttons.iter_mut() {
            button.set_color(Color::from_rgb(35, 35, 35));
            button.set_label_color(Color::from_rgb(220, 220, 220));
        }
        panel_view.set_color(Color::from_rgb(35, 35, 35));
        panel_view.set_text_color(Color::from_rgb(220, 220, 220));
        banner.set_color(Color::from_rgb(139, 0, 0));
        banner.set_label_color(Color::White);
    } else {
        // Day colors
        editor.set_color(Color::White);
        editor.set_text_color(Color::Black);
        editor.set_cursor_color(Color::Black);
        editor.set_selection_color(Color::from_rgb(173, 216, 230));
        window.set_color(Color::from_rgb(240, 240, 240));
        window.set_label_color(Color::Black);
        for button in toolbar_buttons.iter_mut() {
            button.set_color(Color::from_rgb(240, 240, 240));
            button.set_label_color(Color::Black);
        }
        panel_view.set_color(Color::White);
        panel_view.set_text_color(Color::Black);
        banner.set_color(Color::from_rgb(255, 228, 225)); // Misty rose
        banner.set_label_color(Color::Black);
    }

    editor.redraw();
    window.redraw();
}
