//! Page chrome: header and footer

use egui::{RichText, Ui};
use egui_extras::RetainedImage;

/// Render the page heading and tagline.
pub fn page_header(ui: &mut Ui) {
    ui.add_space(4.0);
    ui.heading(RichText::new("Salary Analysis Dashboard").size(26.0).strong());
    ui.label(
        RichText::new(
            "Explore data salaries over recent years. Use the filters on the left to refine your analysis.",
        )
        .color(crate::theme::muted_text_color()),
    );
    ui.add_space(4.0);
}

/// The clickable support badge shown in the footer.
///
/// The PNG bytes are decoded once at startup and uploaded as a texture;
/// a broken asset aborts startup like a missing one would.
pub struct FooterBadge {
    image: RetainedImage,
    url: String,
}

impl FooterBadge {
    pub fn new(bytes: &[u8], url: impl Into<String>) -> Result<Self, String> {
        let image = RetainedImage::from_image_bytes("support_badge", bytes)?;
        Ok(Self {
            image,
            url: url.into(),
        })
    }

    pub fn ui(&self, ui: &mut Ui, credit: &str) {
        ui.add_space(12.0);
        ui.separator();
        ui.vertical_centered(|ui| {
            ui.add_space(6.0);
            ui.label(RichText::new(credit).weak());
            ui.add_space(6.0);

            // Scale to a 40 px tall badge, keeping the aspect ratio.
            let native = self.image.size_vec2();
            let height = 40.0;
            let size = egui::vec2(native.x * height / native.y.max(1.0), height);

            let texture = egui::load::SizedTexture::new(self.image.texture_id(ui.ctx()), size);
            let response = ui
                .add(egui::ImageButton::new(egui::Image::from_texture(texture)).frame(false))
                .on_hover_text(&self.url);
            if response.clicked() {
                ui.ctx().open_url(egui::OpenUrl::new_tab(&self.url));
            }
            ui.add_space(8.0);
        });
    }
}
