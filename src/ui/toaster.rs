// SPDX-License-Identifier: MPL-2.0
//! Iced component rendering a [`ToastStore`] as a stack of cards.
//!
//! The toaster forwards submissions to the store and drives it from a
//! `time::every` subscription. Store changes are turned into enter/exit
//! transitions: an expired toast is already gone from the store when its
//! exit animation starts, and is drawn from the snapshot carried by
//! [`Change::Removed`] until the animation ends.

use crate::config::{Config, Edge, LayoutConfig};
use crate::store::{Change, ToastSender, ToastStore};
use crate::toast::Toast;
use crate::ui::design_tokens::{motion, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::transition::{Easing, Transition, Visual};
use iced::widget::{text, Column, Container, Text};
use iced::{alignment, time, Element, Length, Subscription, Theme};
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum Message {
    /// Submit a toast directly.
    Push(Toast),
    /// Advance timers, inbox and animations.
    Tick(Instant),
}

/// A toast playing its exit animation after leaving the store.
#[derive(Debug, Clone)]
struct Leaving {
    toast: Toast,
    /// Position among all drawn cards, before `reverse` is applied.
    slot: usize,
    transition: Transition,
}

/// One card as it should be drawn at a given instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Card<'a> {
    pub toast: &'a Toast,
    pub visual: Visual,
    /// The toast already left the store and is only animating out.
    pub leaving: bool,
}

#[derive(Debug)]
pub struct Toaster {
    store: ToastStore,
    layout: LayoutConfig,
    transition: Duration,
    easing: Easing,
    entering: HashMap<String, Transition>,
    leaving: Vec<Leaving>,
}

impl Toaster {
    #[must_use]
    pub fn new(store: ToastStore, config: &Config) -> Self {
        Self {
            store,
            layout: config.layout,
            transition: config.motion.transition(),
            easing: Easing::STANDARD,
            entering: HashMap::new(),
            leaving: Vec::new(),
        }
    }

    /// Creates a toaster with its own store, plus a sender feeding it.
    #[must_use]
    pub fn channel(config: &Config) -> (Self, ToastSender) {
        let (store, sender) = ToastStore::channel();
        (Self::new(store, config), sender)
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn store(&self) -> &ToastStore {
        &self.store
    }

    #[must_use]
    pub fn layout(&self) -> LayoutConfig {
        self.layout
    }

    pub fn set_layout(&mut self, layout: LayoutConfig) {
        self.layout = layout;
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Push(toast) => {
                self.push(toast, Instant::now());
            }
            Message::Tick(now) => self.tick(now),
        }
    }

    /// Submits a toast to the store and starts its enter transition if new.
    pub fn push(&mut self, toast: Toast, now: Instant) -> Change {
        let change = self.store.submit(toast, now);
        self.apply(change.clone(), now);
        change
    }

    /// Advances the store, then drops finished transitions.
    pub fn tick(&mut self, now: Instant) {
        for change in self.store.tick(now) {
            self.apply(change, now);
        }
        self.entering.retain(|_, transition| !transition.is_finished(now));
        self.retire_leaving(now);
    }

    /// Drops finished exit animations and closes the gaps they leave.
    fn retire_leaving(&mut self, now: Instant) {
        let finished: Vec<usize> = self
            .leaving
            .iter()
            .filter(|leaving| leaving.transition.is_finished(now))
            .map(|leaving| leaving.slot)
            .collect();
        if finished.is_empty() {
            return;
        }

        self.leaving
            .retain(|leaving| !leaving.transition.is_finished(now));
        for leaving in &mut self.leaving {
            leaving.slot -= finished.iter().filter(|&&slot| slot < leaving.slot).count();
        }
    }

    /// Slot of the store entry at `index` among all drawn cards.
    ///
    /// `leaving` is sorted by slot, and store entries fill the slots that no
    /// leaving card occupies.
    fn slot_of(&self, index: usize) -> usize {
        self.leaving
            .iter()
            .fold(index, |slot, leaving| if leaving.slot <= slot { slot + 1 } else { slot })
    }

    fn apply(&mut self, change: Change, now: Instant) {
        match change {
            Change::Added { id, .. } => {
                self.entering
                    .insert(id, Transition::enter(now, self.transition, self.easing));
            }
            Change::Updated { .. } => {}
            Change::Removed { toast, index } => {
                if let Some(id) = toast.id() {
                    self.entering.remove(id);
                }
                // The card keeps its slot, so the others do not move.
                let slot = self.slot_of(index);
                let at = self.leaving.partition_point(|leaving| leaving.slot < slot);
                self.leaving.insert(
                    at,
                    Leaving {
                        toast,
                        slot,
                        transition: Transition::leave(now, self.transition, self.easing),
                    },
                );
            }
        }
    }

    /// Tears down the store and drops all running animations.
    pub fn teardown(&mut self) {
        self.store.teardown();
        self.entering.clear();
        self.leaving.clear();
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.entering.is_empty() || !self.leaving.is_empty()
    }

    /// Cards in display order, including those animating out.
    #[must_use]
    pub fn cards(&self, now: Instant) -> Vec<Card<'_>> {
        let mut cards: Vec<Card<'_>> = self
            .store
            .toasts()
            .map(|tracked| Card {
                toast: tracked.toast(),
                visual: self
                    .entering
                    .get(tracked.id())
                    .map_or(Visual::SETTLED, |transition| transition.visual(now)),
                leaving: false,
            })
            .collect();

        for leaving in &self.leaving {
            let slot = leaving.slot.min(cards.len());
            cards.insert(
                slot,
                Card {
                    toast: &leaving.toast,
                    visual: leaving.transition.visual(now),
                    leaving: true,
                },
            );
        }

        if self.layout.reverse {
            cards.reverse();
        }
        cards
    }

    /// How often the toaster needs a [`Message::Tick`], if at all.
    ///
    /// A subscribed store keeps polling while idle: the inbox has no wake-up
    /// of its own, so polling is what delivers toasts from a sender.
    #[must_use]
    pub fn poll_interval(&self) -> Option<Duration> {
        if self.is_animating() {
            Some(Duration::from_millis(motion::FRAME_MS))
        } else if self.store.pending_timers() > 0 || self.store.is_subscribed() {
            Some(Duration::from_millis(motion::POLL_MS))
        } else {
            None
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match self.poll_interval() {
            Some(interval) => time::every(interval).map(Message::Tick),
            None => Subscription::none(),
        }
    }

    /// Renders the stack as an overlay filling the available space.
    pub fn view(&self) -> Element<'_, Message> {
        self.view_at(Instant::now())
    }

    pub fn view_at(&self, now: Instant) -> Element<'_, Message> {
        let cards: Vec<Element<'_, Message>> =
            self.cards(now).into_iter().map(view_card).collect();

        let (align_x, align_y) = placement(self.layout);
        let stack = Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(align_x);

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align_x)
            .align_y(align_y)
            .padding(spacing::MD)
            .into()
    }
}

fn placement(layout: LayoutConfig) -> (alignment::Horizontal, alignment::Vertical) {
    let align_x = match layout.align {
        Edge::Start => alignment::Horizontal::Left,
        Edge::End => alignment::Horizontal::Right,
    };
    let align_y = match layout.justify {
        Edge::Start => alignment::Vertical::Top,
        Edge::End => alignment::Vertical::Bottom,
    };
    (align_x, align_y)
}

fn view_card(card: Card<'_>) -> Element<'_, Message> {
    let Visual {
        scale,
        opacity,
        height,
        ..
    } = card.visual;
    let accent = card.toast.kind.color();

    let label = Text::new(card.toast.kind.label())
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| text::Style {
            color: Some(iced::Color {
                a: accent.a * opacity,
                ..accent
            }),
        });
    let message = Text::new(card.toast.message.as_str()).size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(message);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH * scale))
        .max_height(sizing::TOAST_MAX_HEIGHT * height)
        .padding(spacing::SM)
        .clip(true)
        .style(move |theme: &Theme| styles::container::toast_card(theme, accent, opacity))
        .into()
}
