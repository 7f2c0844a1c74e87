//! Custom pointer ring state

/// Pointer state driving the custom cursor ring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorState {
    enabled: bool,
    position: (u32, u32),
    hidden: bool,
    clicked: bool,
    link_hovered: bool,
}

impl CursorState {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            position: (0, 0),
            hidden: true,
            clicked: false,
            link_hovered: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.hidden = true;
        }
    }

    pub fn on_move(&mut self, x: u32, y: u32) {
        self.position = (x, y);
        self.hidden = false;
    }

    pub fn on_leave(&mut self) {
        self.hidden = true;
    }

    pub fn on_enter(&mut self) {
        self.hidden = false;
    }

    pub fn on_down(&mut self) {
        self.clicked = true;
    }

    pub fn on_up(&mut self) {
        self.clicked = false;
    }

    /// Pointer entered or left an interactive target
    pub fn set_link_hovered(&mut self, hovered: bool) {
        self.link_hovered = hovered;
    }

    pub fn position(&self) -> (u32, u32) {
        self.position
    }

    /// Ring is drawn this frame
    pub fn is_visible(&self) -> bool {
        self.enabled && !self.hidden
    }

    pub fn is_clicked(&self) -> bool {
        self.clicked
    }

    pub fn is_link_hovered(&self) -> bool {
        self.link_hovered
    }

    /// Dot grows over links unless the button is held
    pub fn is_dot_expanded(&self) -> bool {
        self.link_hovered && !self.clicked
    }

    /// Outer ring scale
    pub fn ring_scale(&self) -> f32 {
        if self.link_hovered {
            1.5
        } else {
            1.0
        }
    }
}
