// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the toaster on top of a small control panel.
//!
//! Every button exercises one path of the store: timed toasts per kind, a
//! permanent toast, a fixed-id toast that updates in place, and delivery from
//! another thread through a [`ToastSender`].

mod message;

pub use message::{Flags, Message};

use crate::config::{self, Edge};
use crate::store::ToastSender;
use crate::toast::{Toast, ToastKind};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::toaster::{self, Toaster};
use iced::widget::{button, stack, Column, Container, Row, Text};
use iced::{event, window, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Duration;

/// Id shared by every progress toast so they collapse into one card.
const PROGRESS_TOAST_ID: &str = "demo-progress";

/// Delay before the background thread delivers its toast.
const BACKGROUND_DELAY: Duration = Duration::from_secs(1);

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;

pub struct App {
    toaster: Toaster,
    sender: ToastSender,
    default_duration_ms: i64,
    progress: u32,
    emitted: u32,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            exit_on_close_request: false,
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));

        if let Some(align) = flags.align {
            config.layout.align = align;
        }
        if let Some(justify) = flags.justify {
            config.layout.justify = justify;
        }
        config.layout.reverse |= flags.reverse;

        let (mut toaster, sender) = Toaster::channel(&config);
        if let Some(warning) = warning {
            toaster.update(toaster::Message::Push(Toast::warning(warning, 0)));
        }

        let app = App {
            toaster,
            sender,
            default_duration_ms: config.motion.default_duration_ms,
            progress: 0,
            emitted: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.toaster.store().len() {
            0 => "Iced Toasted".to_string(),
            count => format!("Iced Toasted ({count})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toaster(message) => self.toaster.update(message),
            Message::Emit(kind) => {
                self.emitted += 1;
                let text = format!("{kind} toast #{}", self.emitted);
                self.push(Toast::new(kind, text, self.default_duration_ms));
            }
            Message::EmitPermanent => {
                self.push(Toast::info("This toast stays until the app closes", 0));
            }
            Message::Progress => {
                self.progress = (self.progress + 25).min(100);
                let toast = if self.progress >= 100 {
                    self.progress = 0;
                    Toast::success("Upload complete", self.default_duration_ms)
                } else {
                    Toast::info(format!("Uploading... {}%", self.progress), 0)
                };
                self.push(toast.with_id(PROGRESS_TOAST_ID));
            }
            Message::EmitFromBackground => {
                let sender = self.sender.clone();
                let duration = self.default_duration_ms;
                std::thread::spawn(move || {
                    std::thread::sleep(BACKGROUND_DELAY);
                    if let Err(err) =
                        sender.send(Toast::success("Delivered from a worker thread", duration))
                    {
                        log::warn!("background toast dropped: {err}");
                    }
                });
            }
            Message::SetAlign(edge) => {
                let layout = self.toaster.layout();
                self.toaster.set_layout(config::LayoutConfig {
                    align: edge,
                    ..layout
                });
            }
            Message::SetJustify(edge) => {
                let layout = self.toaster.layout();
                self.toaster.set_layout(config::LayoutConfig {
                    justify: edge,
                    ..layout
                });
            }
            Message::ToggleReverse => {
                let layout = self.toaster.layout();
                self.toaster.set_layout(config::LayoutConfig {
                    reverse: !layout.reverse,
                    ..layout
                });
            }
            Message::WindowCloseRequested(id) => {
                self.toaster.teardown();
                return window::close(id);
            }
        }
        Task::none()
    }

    fn push(&mut self, toast: Toast) {
        self.toaster.update(toaster::Message::Push(toast));
    }

    fn subscription(&self) -> Subscription<Message> {
        let close_requests = event::listen_with(|event, _status, window_id| {
            if let event::Event::Window(window::Event::CloseRequested) = event {
                Some(Message::WindowCloseRequested(window_id))
            } else {
                None
            }
        });

        Subscription::batch([
            close_requests,
            self.toaster.subscription().map(Message::Toaster),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        let emit_row = ToastKind::ALL.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, kind| {
                row.push(
                    button(Text::new(format!("{kind}")))
                        .on_press(Message::Emit(*kind))
                        .style(styles::button::tinted(kind.color())),
                )
            },
        );

        let extra_row = Row::new()
            .spacing(spacing::XS)
            .push(
                button(Text::new("Permanent"))
                    .on_press(Message::EmitPermanent)
                    .style(styles::button::tinted(palette::GRAY_400)),
            )
            .push(
                button(Text::new("Progress (same id)"))
                    .on_press(Message::Progress)
                    .style(styles::button::tinted(palette::GRAY_400)),
            )
            .push(
                button(Text::new("From background"))
                    .on_press(Message::EmitFromBackground)
                    .style(styles::button::tinted(palette::GRAY_400)),
            );

        let layout = self.toaster.layout();
        let edge_button = |label: &'static str, active: bool, message: Message| {
            let color = if active {
                palette::INFO_500
            } else {
                palette::GRAY_900
            };
            button(Text::new(label))
                .on_press(message)
                .style(styles::button::tinted(color))
        };
        let layout_row = Row::new()
            .spacing(spacing::XS)
            .push(edge_button(
                "Left",
                layout.align == Edge::Start,
                Message::SetAlign(Edge::Start),
            ))
            .push(edge_button(
                "Right",
                layout.align == Edge::End,
                Message::SetAlign(Edge::End),
            ))
            .push(edge_button(
                "Top",
                layout.justify == Edge::Start,
                Message::SetJustify(Edge::Start),
            ))
            .push(edge_button(
                "Bottom",
                layout.justify == Edge::End,
                Message::SetJustify(Edge::End),
            ))
            .push(edge_button(
                "Reverse",
                layout.reverse,
                Message::ToggleReverse,
            ));

        let controls = Column::new()
            .spacing(spacing::MD)
            .push(Text::new("Toasts").size(typography::BODY))
            .push(emit_row)
            .push(extra_row)
            .push(Text::new("Layout").size(typography::BODY))
            .push(layout_row);

        let panel = Container::new(controls)
            .center_x(Length::Fill)
            .center_y(Length::Fill);

        stack![panel, self.toaster.view().map(Message::Toaster)].into()
    }
}
