use eframe::egui;
use roster_core::{seed, RosterStore};
use shared::domain::{DraftField, MemberDraft, TeamMember};

use crate::controller::reducer::{EntryForm, FormPhase};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub seed: Vec<MemberDraft>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            seed: seed::demo_roster(),
        }
    }
}

pub struct RosterApp {
    store: RosterStore,
    form: EntryForm,

    status: String,

    // Stable per-view UI state so text boxes keep focus reliably.
    focus_field: Option<DraftField>,
    attempted_auto_focus: bool,
}

impl RosterApp {
    pub fn new(cc: &eframe::CreationContext<'_>, startup: StartupConfig) -> Self {
        let mut store = RosterStore::with_seed(startup.seed);

        // Each snapshot replacement schedules a repaint so the list view
        // re-derives its output from the latest collection value.
        let repaint_ctx = cc.egui_ctx.clone();
        store.subscribe(move |_snapshot| repaint_ctx.request_repaint());

        Self {
            store,
            form: EntryForm::new(),
            status: String::new(),
            focus_field: Some(DraftField::Name),
            attempted_auto_focus: false,
        }
    }

    fn submit_entry_form(&mut self) {
        let draft = self.form.take_submission();
        self.store.append(draft);
        self.status = member_count_status(self.store.len());
        self.focus_field = Some(DraftField::Name);
    }

    fn draft_text_field(
        &mut self,
        ui: &mut egui::Ui,
        id: &'static str,
        label: &str,
        hint: &str,
        value: &mut String,
        should_focus: bool,
    ) -> egui::Response {
        ui.label(egui::RichText::new(label).strong());
        let edit = egui::TextEdit::singleline(value)
            .id_salt(id)
            .hint_text(
                egui::RichText::new(hint)
                    .color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
            )
            .desired_width(f32::INFINITY);

        let response = ui.add_sized([ui.available_width(), 30.0], edit);

        // One-time / directed focus that doesn't flicker.
        if should_focus {
            response.request_focus();
        }

        response
    }

    fn show_member_list(&mut self, ui: &mut egui::Ui) {
        let members = self.store.snapshot();

        ui.horizontal(|ui| {
            ui.heading("Our Team");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(member_count_label(members.len()));
            });
        });
        ui.add_space(6.0);

        if members.is_empty() {
            ui.label("No team members yet. Add the first one below.");
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for member in members.iter() {
                    // The record id keys the card scope so rows never swap
                    // widget state when the list grows.
                    ui.push_id(member.id.0, |ui| {
                        show_member_card(ui, member);
                    });
                    ui.add_space(6.0);
                }
            });
    }

    fn show_entry_form(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Add a member").strong().size(16.0));
            if self.form.phase() == FormPhase::Editing {
                ui.weak("unsaved draft");
            }
        });
        ui.add_space(4.0);

        // Determine focus request (once at startup, or after a submit).
        let mut focus_to_set = None;
        if !self.attempted_auto_focus {
            self.attempted_auto_focus = true;
            focus_to_set = self.focus_field.take();
        } else if self.focus_field.is_some() {
            focus_to_set = self.focus_field.take();
        }

        let draft = self.form.draft().clone();
        let mut name_buf = draft.name;
        let mut email_buf = draft.email;
        let mut role_buf = draft.role;

        let name_resp = self.draft_text_field(
            ui,
            "entry_name",
            "Name",
            "Full name",
            &mut name_buf,
            focus_to_set == Some(DraftField::Name),
        );
        if name_resp.changed() {
            self.form.apply_edit(DraftField::Name, name_buf);
        }

        ui.add_space(4.0);

        let email_resp = self.draft_text_field(
            ui,
            "entry_email",
            "Email",
            "name@email.com",
            &mut email_buf,
            focus_to_set == Some(DraftField::Email),
        );
        if email_resp.changed() {
            self.form.apply_edit(DraftField::Email, email_buf);
        }

        ui.add_space(4.0);

        let role_resp = self.draft_text_field(
            ui,
            "entry_role",
            "Role",
            "What they do",
            &mut role_buf,
            focus_to_set == Some(DraftField::Role),
        );
        if role_resp.changed() {
            self.form.apply_edit(DraftField::Role, role_buf);
        }

        // Enter submits from any field; a singleline edit surrenders focus
        // on Enter, so the keypress shows up as lost_focus. The keypress is
        // consumed here and never tears down any other in-memory state.
        let enter_pressed = ctx.input(|i| i.key_pressed(egui::Key::Enter));
        let can_submit =
            name_resp.lost_focus() || email_resp.lost_focus() || role_resp.lost_focus();
        if can_submit && enter_pressed {
            self.submit_entry_form();
        }

        ui.add_space(8.0);

        let add_btn = egui::Button::new(egui::RichText::new("Add member").strong())
            .min_size(egui::vec2(ui.available_width(), 32.0));
        if ui.add(add_btn).clicked() {
            self.submit_entry_form();
        }

        if !self.status.is_empty() {
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
            });
        }
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("entry_form_panel")
            .resizable(false)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .show(ui, |ui| {
                        self.show_entry_form(ctx, ui);
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::NONE
                .inner_margin(egui::Margin::symmetric(12, 10))
                .show(ui, |ui| {
                    self.show_member_list(ui);
                });
        });
    }
}

fn show_member_card(ui: &mut egui::Ui, member: &TeamMember) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading(&member.name);
            ui.label(&member.email);
            ui.small(&member.role);
        });
}

fn member_count_label(count: usize) -> String {
    if count == 1 {
        "1 member".to_string()
    } else {
        format!("{count} members")
    }
}

fn member_count_status(count: usize) -> String {
    format!("Team now has {}", member_count_label(count))
}
