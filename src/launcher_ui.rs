use crate::launcher::{Launcher, ProcessImage};
use crate::variant::{LaunchOptions, Variant};
use eframe::egui;

pub struct LauncherUi<X: ProcessImage> {
    launcher: Launcher<X>,
    pub windowed: bool,
    pub mod_path: String,
    pub status: String,
}

impl<X: ProcessImage> LauncherUi<X> {
    /// Starts with the fields prefilled from whatever the command line said.
    pub fn new(launcher: Launcher<X>, initial: LaunchOptions) -> Self {
        Self {
            launcher,
            windowed: initial.windowed,
            mod_path: initial.mod_path.unwrap_or_default(),
            status: String::new(),
        }
    }

    fn options(&self) -> LaunchOptions {
        LaunchOptions::new(self.windowed, self.mod_path.clone())
    }

    /// Only comes back if the game could not be started.
    pub fn launch(&mut self, variant: Variant) {
        let err = self.launcher.run(variant, &self.options());
        log::error!("{err}");
        self.status = format!("Failed to launch {}: {err}", variant.title());
    }

    fn variant_button(&mut self, ui: &mut egui::Ui, label: &str, variant: Variant) {
        if ui
            .button(label)
            .on_hover_text(variant.title())
            .clicked()
        {
            self.launch(variant);
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Homeworld Remastered Launcher");
        ui.label(format!(
            "Steam: {}",
            self.launcher.installation().client_path().display()
        ));

        ui.group(|ui| {
            ui.label("Classic");
            ui.horizontal(|ui| {
                self.variant_button(ui, "Homeworld 1", Variant::Hw1Classic);
                self.variant_button(ui, "Homeworld 2", Variant::Hw2Classic);
            });
        });

        ui.group(|ui| {
            ui.label("Remastered");
            ui.horizontal(|ui| {
                self.variant_button(ui, "Homeworld 1", Variant::Hw1Remastered);
                self.variant_button(ui, "Homeworld 2", Variant::Hw2Remastered);
            });
        });

        ui.group(|ui| {
            ui.label("Multiplayer");
            self.variant_button(ui, "Homeworld Remastered", Variant::Multiplayer);
        });

        ui.group(|ui| {
            ui.label("Options");
            ui.checkbox(&mut self.windowed, "Windowed");
            ui.horizontal(|ui| {
                ui.label("Mod Path");
                ui.add(egui::TextEdit::singleline(&mut self.mod_path).hint_text("Path to Mod"));
            });
        });

        if !self.status.is_empty() {
            ui.separator();
            ui.label(&self.status);
        }
    }
}

impl<X: ProcessImage> eframe::App for LauncherUi<X> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
