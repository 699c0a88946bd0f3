//! Modal dialog: a dimming overlay with a centred window on top.
//!
//! While a modal is open the overlay swallows pointer input, so nothing
//! underneath can be clicked or dragged. Pressing Escape dismisses the
//! modal; clicking the overlay dismisses it only when allowed.

use egui::{Align2, Color32, Context, Id, Order, Sense};

/// What happened to an open modal during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalResponse {
    /// The user asked to close the modal without choosing an action
    pub dismissed: bool,
}

pub struct Modal {
    id: Id,
    title: String,
    close_on_overlay_click: bool,
    overlay: Color32,
}

const MODAL_WIDTH: f32 = 320.0;

/// Escape always dismisses; an overlay click only when `overlay_dismisses`
pub fn is_dismissed(overlay_clicked: bool, escape_pressed: bool, overlay_dismisses: bool) -> bool {
    escape_pressed || (overlay_clicked && overlay_dismisses)
}

impl Modal {
    pub fn new(id: impl std::hash::Hash, title: impl Into<String>) -> Self {
        Self {
            id: Id::new(id),
            title: title.into(),
            close_on_overlay_click: true,
            overlay: Color32::from_black_alpha(120),
        }
    }

    pub fn close_on_overlay_click(mut self, allowed: bool) -> Self {
        self.close_on_overlay_click = allowed;
        self
    }

    pub fn overlay_color(mut self, color: Color32) -> Self {
        self.overlay = color;
        self
    }

    /// Draw the modal if `open`. Nothing is drawn and the response is
    /// empty while closed.
    pub fn show(
        self,
        ctx: &Context,
        open: bool,
        add_contents: impl FnOnce(&mut egui::Ui),
    ) -> ModalResponse {
        let mut response = ModalResponse::default();
        if !open {
            return response;
        }

        let screen = ctx.screen_rect();
        let overlay_clicked = egui::Area::new(self.id.with("overlay"))
            .order(Order::Middle)
            .fixed_pos(screen.min)
            .interactable(true)
            .show(ctx, |ui| {
                ui.painter().rect_filled(screen, 0.0, self.overlay);
                ui.allocate_rect(screen, Sense::click()).clicked()
            })
            .inner;

        egui::Window::new(self.title.as_str())
            .id(self.id)
            .order(Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(MODAL_WIDTH);
                ui.set_max_width(MODAL_WIDTH + 80.0);
                add_contents(ui);
            });

        let escape_pressed = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        response.dismissed =
            is_dismissed(overlay_clicked, escape_pressed, self.close_on_overlay_click);

        response
    }
}
