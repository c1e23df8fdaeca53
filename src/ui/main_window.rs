use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, Event, FrameType},
    frame::Frame,
    group::{Flex, Group},
    misc::HelpView,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::messages::Message;
use crate::app::tools;

pub const TOOLBAR_HEIGHT: i32 = 30;
pub const BANNER_HEIGHT: i32 = 28;

const WINDOW_WIDTH: i32 = 800;
const WINDOW_HEIGHT: i32 = 600;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub toolbar_buttons: Vec<Button>,
    pub editor: TextEditor,
    pub panel_group: Group,
    pub panel_view: HelpView,
    pub banner: Frame,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, WINDOW_WIDTH, WINDOW_HEIGHT, "Scratchpad");
    wind.set_xclass("Scratchpad");

    let mut flex = Flex::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, None);
    flex.set_type(fltk::group::FlexType::Column);

    // Toolbar: one affordance per registered tool, in registry order
    let mut toolbar = Flex::new(0, 0, 0, TOOLBAR_HEIGHT, None);
    toolbar.set_type(fltk::group::FlexType::Row);
    let mut toolbar_buttons = Vec::new();
    for (index, tool) in tools::REGISTRY.iter().enumerate() {
        let mut button = Button::default().with_label(&format!("~{}", tool.name));
        button.set_frame(FrameType::FlatBox);
        button.set_callback({
            let s = *sender;
            move |_| s.send(Message::ActivateTool(index))
        });
        toolbar.fixed(&button, 90);
        toolbar_buttons.push(button);
    }
    // Trailing frame absorbs the leftover row width
    let _spacer = Frame::default();
    toolbar.end();
    flex.fixed(&toolbar, TOOLBAR_HEIGHT);

    let mut editor = TextEditor::new(0, 0, 0, 0, "");
    editor.set_buffer(TextBuffer::default());
    editor.wrap_mode(WrapMode::AtBounds, 0);

    flex.end();
    wind.resizable(&flex);

    // Dismissable panel host: hidden until a panel-producing tool opens one.
    // An overlay child of the window, repositioned over the right half of
    // the editor whenever it is shown.
    let panel_x = WINDOW_WIDTH / 2;
    let panel_h = WINDOW_HEIGHT - TOOLBAR_HEIGHT;
    let mut panel_group = Group::new(panel_x, TOOLBAR_HEIGHT, WINDOW_WIDTH / 2, panel_h, None);
    panel_group.set_frame(FrameType::BorderBox);

    let mut panel_close = Button::new(
        panel_x + WINDOW_WIDTH / 2 - 26,
        TOOLBAR_HEIGHT + 4,
        20,
        20,
        "x",
    );
    panel_close.set_frame(FrameType::FlatBox);
    panel_close.set_callback({
        let s = *sender;
        move |_| s.send(Message::DismissPanel)
    });

    let panel_view = HelpView::new(
        panel_x + 2,
        TOOLBAR_HEIGHT + 28,
        WINDOW_WIDTH / 2 - 4,
        panel_h - 30,
        "",
    );
    panel_group.end();
    panel_group.hide();

    // Error banner: hidden until a tool fails, dismissed by a click anywhere
    // on it
    let mut banner = Frame::new(
        0,
        WINDOW_HEIGHT - BANNER_HEIGHT,
        WINDOW_WIDTH,
        BANNER_HEIGHT,
        None,
    );
    banner.set_frame(FrameType::FlatBox);
    banner.set_align(Align::Inside | Align::Left);
    banner.set_label_size(13);
    banner.set_color(Color::from_rgb(255, 228, 225));
    banner.set_label_color(Color::Black);
    banner.hide();
    banner.handle({
        let s = *sender;
        move |_, event| {
            if event == Event::Push {
                s.send(Message::DismissError);
                true
            } else {
                false
            }
        }
    });

    wind.end();

    MainWidgets {
        wind,
        flex,
        toolbar_buttons,
        editor,
        panel_group,
        panel_view,
        banner,
    }
}

/// Wrap panel HTML in HelpView-compatible font tags.
pub fn wrap_for_helpview(html: &str) -> String {
    format!("<font face=\"Helvetica\" size=\"3\">{}</font>", html)
}
