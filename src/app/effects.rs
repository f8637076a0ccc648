use crate::controller::{Effect, Notice};
use crate::mail::seed;
use crate::ui::components::ComposeForm;

use super::App;

impl App {
    /// Run dispatcher effects in order, then re-validate the cursor
    pub(super) fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Mutate(mutation) => {
                    let changed = self.mailbox.apply(&mutation);
                    tracing::debug!(?mutation, changed, "mailbox mutated");
                }
                Effect::Notify(notice) => self.notify(notice),
                Effect::OpenCompose(prefill) => self.compose = Some(ComposeForm::with_prefill(&prefill)),
                Effect::CloseCompose => self.compose = None,
                Effect::Deliver(draft) => {
                    self.mailbox.record_sent(&draft, &seed::account());
                }
                Effect::Search => self.notify(Notice::info("Search feature coming soon")),
            }
        }

        let view = self.mailbox.view(self.session.folder());
        self.session.reconcile(&view);
    }
}
