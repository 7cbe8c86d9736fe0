use anyhow::Result;
use chrono::NaiveDate;
use ratatui::widgets::TableState;
use triplog_core::time::{day_key, today};
use triplog_core::{
    day_route, day_total, draft_from_args, split_line, Coordinate, TripError, TripRecord, TripRepository,
    TripService,
};

pub enum InputMode {
    Normal,
    Adding,
}

pub struct App<R: TripRepository> {
    pub service: TripService<R>,
    pub owner_id: String,
    pub trips: Vec<TripRecord>,
    pub state: TableState,
    pub selected_day: NaiveDate,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub message: Option<String>,
}

impl<R: TripRepository> App<R> {
    pub fn new(service: TripService<R>, owner_id: String, selected_day: NaiveDate) -> Result<Self> {
        let trips = service.list_trips(&owner_id)?;
        let mut state = TableState::default();
        if !trips.is_empty() {
            state.select(Some(0));
        }
        Ok(App {
            service,
            owner_id,
            trips,
            state,
            selected_day,
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            message: None,
        })
    }

    pub fn next(&mut self) {
        if self.trips.is_empty() { return; }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.trips.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.trips.is_empty() { return; }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.trips.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn next_day(&mut self) {
        if let Some(day) = self.selected_day.succ_opt() {
            self.selected_day = day;
        }
    }

    pub fn previous_day(&mut self) {
        if let Some(day) = self.selected_day.pred_opt() {
            self.selected_day = day;
        }
    }

    pub fn jump_to_today(&mut self) {
        self.selected_day = today();
    }

    /// Selects the day of the highlighted trip, if its date is a real day.
    pub fn jump_to_trip_day(&mut self) {
        let Some(trip) = self.state.selected().and_then(|i| self.trips.get(i)) else {
            return;
        };
        match NaiveDate::parse_from_str(&trip.date, triplog_core::time::DAY_FORMAT) {
            Ok(day) => self.selected_day = day,
            Err(_) => self.message = Some(format!("'{}' is not a calendar day", trip.date)),
        }
    }

    pub fn selected_date(&self) -> String {
        day_key(self.selected_day)
    }

    pub fn day_total(&self) -> f64 {
        day_total(&self.trips, &self.selected_date())
    }

    pub fn day_route(&self) -> Vec<Coordinate> {
        day_route(&self.trips, &self.selected_date())
    }

    pub fn day_trips(&self) -> Vec<&TripRecord> {
        triplog_core::day_trips(&self.trips, &self.selected_date())
    }

    fn reload_trips(&mut self) {
        if let Ok(trips) = self.service.list_trips(&self.owner_id) {
            self.trips = trips;
        }
    }

    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::Adding;
        self.input.clear();
        self.cursor_position = 0;
        self.message = None;
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.input.chars().take(self.cursor_position).map(|c| c.len_utf8()).sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self.input.chars().take(self.cursor_position - 1).map(|c| c.len_utf8()).sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn submit_command(&mut self) {
        if self.input.trim().is_empty() {
            self.exit_input_mode();
            return;
        }

        if let InputMode::Adding = self.input_mode {
            self.submit_add();
        }

        self.input.clear();
        self.cursor_position = 0;
        self.exit_input_mode();
    }

    fn submit_add(&mut self) {
        let mut draft = match draft_from_args(&split_line(&self.input)) {
            Ok(draft) => draft,
            Err(e) => {
                self.message = Some(e.to_string());
                return;
            }
        };

        // The form starts on the selected calendar day
        if draft.date.is_empty() {
            draft.date = self.selected_date();
        }

        match self.service.add_trip(&self.owner_id, draft) {
            Ok(created) => {
                self.message = Some(format!("Added {} {} → {}", created.date, created.from, created.to));
                self.reload_trips();
                if let Some(pos) = self.trips.iter().position(|t| t.id == created.id) {
                    self.state.select(Some(pos));
                }
            }
            Err(TripError::Rejected(reason)) => self.message = Some(format!("Not added: {}", reason)),
            Err(TripError::Storage(e)) => self.message = Some(format!("Error: {:#}", e)),
        }
    }
}
