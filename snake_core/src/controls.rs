// controls.rs

use super::input::{InputEvent, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ControlArea {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ControlArea {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }
}

/// A clickable button. Drawing it is up to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
    pub area: ControlArea,
    pub label: &'static str,
}

impl Control {
    pub fn new(area: ControlArea, label: &'static str) -> Self {
        Self { area, label }
    }
}

/// The buttons as currently laid out on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Controls {
    pub start: Control,
    pub restart: Control,
}

impl Controls {
    pub const START_LABEL: &'static str = "Start Game";
    pub const RESTART_LABEL: &'static str = "Restart";

    pub fn new(start: ControlArea, restart: ControlArea) -> Self {
        Self {
            start: Control::new(start, Self::START_LABEL),
            restart: Control::new(restart, Self::RESTART_LABEL),
        }
    }
}

pub fn is_point_inside(control: &Control, point: Point) -> bool {
    let area = control.area;
    (area.x..area.right()).contains(&point.x) && (area.y..area.bottom()).contains(&point.y)
}

pub fn was_activated(control: &Control, event: &InputEvent) -> bool {
    match event {
        InputEvent::ConfirmAt(point) => is_point_inside(control, *point),
        InputEvent::Confirm => true,
        _ => false,
    }
}
