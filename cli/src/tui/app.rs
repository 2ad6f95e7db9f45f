use chrono::NaiveDate;
use ratatui::widgets::TableState;
use timecard_core::{AttendanceTracker, ComplianceThresholds, Dashboard, DashboardUseCase, Submission};
use tracing::{info, warn};

pub const FIELD_LABELS: [&str; 4] = ["Name", "Date", "In", "Out"];

pub enum InputMode {
    Normal,
    Editing,
}

/// The entry modal: four text fields, one focused at a time.
#[derive(Debug, Default)]
pub struct EntryForm {
    pub fields: [String; 4],
    pub focus: usize,
    pub error: Option<String>,
}

impl EntryForm {
    fn reset(&mut self, today: NaiveDate) {
        self.fields = Default::default();
        self.fields[1] = today.format("%Y-%m-%d").to_string();
        self.focus = 0;
        self.error = None;
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn previous_field(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    pub fn input_char(&mut self, c: char) {
        self.fields[self.focus].push(c);
    }

    pub fn delete_char(&mut self) {
        self.fields[self.focus].pop();
    }
}

pub struct App {
    pub tracker: AttendanceTracker,
    pub dashboard: Dashboard,
    pub form: EntryForm,
    pub input_mode: InputMode,
    pub state: TableState,
    today: NaiveDate,
}

impl App {
    pub fn new(thresholds: ComplianceThresholds, today: NaiveDate) -> App {
        let tracker = AttendanceTracker::new(thresholds);
        let dashboard = DashboardUseCase::new(&tracker).build();
        let mut form = EntryForm::default();
        form.reset(today);
        App {
            tracker,
            dashboard,
            form,
            input_mode: InputMode::Normal,
            state: TableState::default(),
            today,
        }
    }

    pub fn next(&mut self) {
        let len = self.dashboard.daily_rows.len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.dashboard.daily_rows.len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn open_form(&mut self) {
        self.form.reset(self.today);
        self.input_mode = InputMode::Editing;
    }

    pub fn close_form(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Records the form as one entry. On a validation error the form stays open
    /// and shows the message.
    pub fn submit_form(&mut self) {
        let [person, date, start, end] = &self.form.fields;
        match Submission::from_fields(person, date, start, end, self.today) {
            Ok(submission) => {
                let recorded = self.tracker.submit(submission);
                info!(
                    person = %recorded.entry.person,
                    week_total = recorded.summary.total_hours(),
                    "entry submitted"
                );
                self.dashboard = DashboardUseCase::new(&self.tracker).build();
                self.state.select(Some(self.dashboard.daily_rows.len() - 1));
                self.form.reset(self.today);
                self.close_form();
            }
            Err(e) => {
                warn!(error = %e, "entry form rejected");
                self.form.error = Some(e.to_string());
            }
        }
    }
}
