use crate::config::{self, Mode};
use crate::events::AppEvent;
use crate::gui::menu::{self, ButtonSpec, Point, RingParams, State};
use crate::gui::theme::{self, Theme};
use crate::gui::window;
use crate::sys::launch;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppInit {
    pub state: State,
    pub theme: Theme,
    pub mode: Mode,
    pub events: async_channel::Receiver<AppEvent>,
}

pub struct AppModel {
    pub state: Rc<RefCell<State>>,
    pub theme: Rc<RefCell<Theme>>,
    pub mode: Mode,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Show,
    Hide,
    SetPos(Point),
    /// Right-click or long-press at the given surface coordinates.
    Trigger(Point),
    Click(Point, u32),
    CursorMove(Point),
    UpdateButtons(Vec<ButtonSpec>),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Show => AppMsg::Show,
            AppEvent::Hide => AppMsg::Hide,
            AppEvent::SetPos(p) => AppMsg::SetPos(p),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Rondel"),
            add_css_class: "rondel-window",
            set_decorated: false,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Hide);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "rondel-drawing-area",

                add_controller = gtk::EventControllerMotion {
                    connect_motion[sender] => move |_, x, y| {
                        sender.input(AppMsg::CursorMove(Point::new(x, y)));
                    }
                },

                add_controller = gtk::GestureClick {
                    set_button: gdk::BUTTON_PRIMARY,
                    connect_released[sender] => move |gesture, _, x, y| {
                        sender.input(AppMsg::Click(Point::new(x, y), gesture.current_button()));
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            state,
            theme,
            mode,
            events,
        } = init;

        theme::load_css();
        window::init_layer_shell(&root);

        let state = Rc::new(RefCell::new(state));
        let theme = Rc::new(RefCell::new(theme));

        let model = AppModel {
            state: state.clone(),
            theme: theme.clone(),
            mode,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        // Fixed mode never attaches the trigger surface; the menu is shown
        // at the configured position and driven by the host.
        if mode == Mode::Floating {
            attach_triggers(&widgets.drawing_area, &sender);
        }

        let state_draw = state.clone();
        let theme_draw = theme.clone();
        widgets.drawing_area.set_draw_func(move |_, cr, _, _| {
            if let Err(e) = menu::draw(cr, &state_draw.borrow(), &theme_draw.borrow()) {
                log::error!("Drawing error: {}", e);
            }
        });

        let sender_clone = sender.clone();
        relm4::spawn_local(async move {
            while let Ok(event) = events.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Show => {
                self.state.borrow_mut().show();
                self.drawing_area.queue_draw();
            }
            AppMsg::Hide => {
                self.state.borrow_mut().hide();
                self.drawing_area.queue_draw();
            }
            AppMsg::SetPos(pos) => {
                self.state.borrow_mut().set_pos(pos);
                self.drawing_area.queue_draw();
            }
            AppMsg::Trigger(pos) => {
                let mut state = self.state.borrow_mut();
                state.set_pos(pos);
                state.show();
                drop(state);
                self.drawing_area.queue_draw();
            }
            AppMsg::Click(pos, button) => {
                if button != gdk::BUTTON_PRIMARY {
                    return;
                }
                let action = {
                    let mut state = self.state.borrow_mut();
                    if !state.visible {
                        return;
                    }
                    let hit = state.hit_test(pos);
                    let action = hit.and_then(|i| state.action(i));
                    match self.mode {
                        Mode::Floating => state.hide(),
                        Mode::Fixed if hit.is_none() => state.hide(),
                        Mode::Fixed => {}
                    }
                    action
                };
                // run the callback outside the borrow so it may message the menu
                if let Some(action) = action {
                    action();
                }
                self.drawing_area.queue_draw();
            }
            AppMsg::CursorMove(pos) => {
                if self.state.borrow_mut().update_cursor(pos) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::UpdateButtons(buttons) => {
                self.state.borrow_mut().update_buttons(buttons);
                self.drawing_area.queue_draw();
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    *self.theme.borrow_mut() = Theme::from_config(&new_config);
                    let mut state = self.state.borrow_mut();
                    state.set_params(RingParams::from(&new_config));
                    state.update_buttons(launch::button_specs(&new_config.buttons));
                    drop(state);
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}

fn attach_triggers(drawing_area: &gtk::DrawingArea, sender: &ComponentSender<AppModel>) {
    let right_click = gtk::GestureClick::new();
    right_click.set_button(gdk::BUTTON_SECONDARY);
    {
        let sender = sender.clone();
        right_click.connect_pressed(move |gesture, _, x, y| {
            gesture.set_state(gtk::EventSequenceState::Claimed);
            sender.input(AppMsg::Trigger(Point::new(x, y)));
        });
    }
    drawing_area.add_controller(right_click);

    // GTK only emits `pressed` once the long-press timeout (500 ms by
    // default) elapses; an earlier release emits `cancelled` instead, so a
    // short tap never shows the menu.
    let long_press = gtk::GestureLongPress::new();
    long_press.set_touch_only(true);
    {
        let sender = sender.clone();
        long_press.connect_pressed(move |_, x, y| {
            sender.input(AppMsg::Trigger(Point::new(x, y)));
        });
    }
    drawing_area.add_controller(long_press);
}
