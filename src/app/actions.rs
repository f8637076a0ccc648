use crate::ai::AiFeature;
use crate::controller::Notice;
use crate::input::Command;
use crate::mail::Folder;
use crate::ui::components::PaletteAction;

use super::App;

impl App {
    pub(super) fn run_palette_action(&mut self, action: PaletteAction) {
        match action {
            PaletteAction::GoTo(folder) => self.switch_folder(folder),
            PaletteAction::Run(command) => self.dispatch(command),
            PaletteAction::Ai(feature) => self.request_ai(feature),
            PaletteAction::Settings => {
                let text = format!("Settings: {}", self.config_path.display());
                self.notify(Notice::info(text));
            }
            PaletteAction::Shortcuts => self.dispatch(Command::Help),
            PaletteAction::Quit => self.should_quit = true,
        }
    }

    /// Change folders; any assistant output belonged to the old selection
    pub(super) fn switch_folder(&mut self, folder: Folder) {
        self.session.set_folder(folder);
        self.ai.reset();
    }

    /// Start an assistant request for the email under the cursor
    pub(super) fn request_ai(&mut self, feature: AiFeature) {
        if !self.config.ai.premium {
            self.notify(Notice::warning("Upgrade to Premium for AI features"));
            return;
        }

        let Some((id, subject)) = self
            .current_email()
            .map(|email| (email.id.clone(), email.subject.clone()))
        else {
            self.notify(Notice::warning("Select an email first"));
            return;
        };

        self.ai.request(feature, &id, &subject);
        self.notify(Notice::info(format!("{}...", feature.label())));
    }
}
