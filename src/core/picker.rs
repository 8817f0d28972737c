//! Modal picker with three mutually exclusive modes.
//!
//! The mode is fixed when the picker is opened and only the widget for that
//! mode exists. `confirm` and `cancel` both consume the picker, and the
//! result callback is `FnOnce`, so one open/close cycle emits at most one
//! result.

use crate::errors::{AppError, AppResult};
use crate::models::field::EntryField;
use crate::utils::{date, time};
use chrono::{NaiveDate, NaiveTime};

/// A value chosen in the picker, tagged with the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerValue {
    Office(String),
    Date(NaiveDate),
    TimeIn(NaiveTime),
    TimeOut(NaiveTime),
}

impl PickerValue {
    pub fn field(&self) -> EntryField {
        match self {
            PickerValue::Office(_) => EntryField::Office,
            PickerValue::Date(_) => EntryField::Date,
            PickerValue::TimeIn(_) => EntryField::TimeIn,
            PickerValue::TimeOut(_) => EntryField::TimeOut,
        }
    }
}

/// The single event emitted on confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerResult {
    pub row: usize,
    pub value: PickerValue,
}

impl PickerResult {
    pub fn mode(&self) -> EntryField {
        self.value.field()
    }
}

/// Built when a cell is tapped, consumed by `Picker::open`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerRequest {
    pub target_row: usize,
    pub field: EntryField,
    pub office_candidates: Vec<String>,
    /// Current value of the tapped field, used to seed the widget.
    pub preset: Option<PickerValue>,
}

impl PickerRequest {
    pub fn new(target_row: usize, field: EntryField) -> Self {
        Self {
            target_row,
            field,
            office_candidates: Vec::new(),
            preset: None,
        }
    }

    pub fn with_candidates(mut self, candidates: Vec<String>) -> Self {
        self.office_candidates = candidates;
        self
    }

    pub fn with_preset(mut self, preset: Option<PickerValue>) -> Self {
        self.preset = preset;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerMode {
    Office,
    Date,
    Time { is_time_in: bool },
}

impl From<EntryField> for PickerMode {
    fn from(field: EntryField) -> Self {
        match field {
            EntryField::Office => PickerMode::Office,
            EntryField::Date => PickerMode::Date,
            EntryField::TimeIn => PickerMode::Time { is_time_in: true },
            EntryField::TimeOut => PickerMode::Time { is_time_in: false },
        }
    }
}

#[derive(Debug)]
enum Widget {
    OfficeWheel {
        candidates: Vec<String>,
        selected: usize,
    },
    DateWheel(NaiveDate),
    TimeWheel {
        is_time_in: bool,
        value: NaiveTime,
    },
}

pub struct Picker<F: FnOnce(PickerResult)> {
    row: usize,
    widget: Widget,
    on_result: F,
}

impl<F: FnOnce(PickerResult)> Picker<F> {
    /// Open the picker for `request`. `on_result` receives the value on confirm.
    pub fn open(request: PickerRequest, on_result: F) -> AppResult<Self> {
        let widget = match PickerMode::from(request.field) {
            PickerMode::Office => {
                if request.office_candidates.is_empty() {
                    return Err(AppError::Picker("no offices to choose from".into()));
                }
                let selected = match &request.preset {
                    Some(PickerValue::Office(name)) => request
                        .office_candidates
                        .iter()
                        .position(|c| c == name)
                        .unwrap_or(0),
                    _ => 0,
                };
                Widget::OfficeWheel {
                    candidates: request.office_candidates,
                    selected,
                }
            }
            PickerMode::Date => match request.preset {
                Some(PickerValue::Date(d)) => Widget::DateWheel(d),
                _ => Widget::DateWheel(date::today()),
            },
            PickerMode::Time { is_time_in } => {
                let value = match request.preset {
                    Some(PickerValue::TimeIn(t)) | Some(PickerValue::TimeOut(t)) => t,
                    _ => time::now_minute(),
                };
                Widget::TimeWheel { is_time_in, value }
            }
        };

        Ok(Self {
            row: request.target_row,
            widget,
            on_result,
        })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn mode(&self) -> PickerMode {
        match &self.widget {
            Widget::OfficeWheel { .. } => PickerMode::Office,
            Widget::DateWheel(_) => PickerMode::Date,
            Widget::TimeWheel { is_time_in, .. } => PickerMode::Time {
                is_time_in: *is_time_in,
            },
        }
    }

    /// Office names shown by the wheel; empty outside office mode.
    pub fn office_candidates(&self) -> &[String] {
        match &self.widget {
            Widget::OfficeWheel { candidates, .. } => candidates,
            _ => &[],
        }
    }

    pub fn selected_office(&self) -> Option<usize> {
        match &self.widget {
            Widget::OfficeWheel { selected, .. } => Some(*selected),
            _ => None,
        }
    }

    pub fn select_office(&mut self, index: usize) -> AppResult<()> {
        let mode = self.mode();
        match &mut self.widget {
            Widget::OfficeWheel {
                candidates,
                selected,
            } => {
                if index >= candidates.len() {
                    return Err(AppError::Picker(format!(
                        "office index {} out of range (0..{})",
                        index,
                        candidates.len()
                    )));
                }
                *selected = index;
                Ok(())
            }
            _ => Err(inactive("office", mode)),
        }
    }

    /// Move the wheel by `delta` rows, stopping at either end.
    pub fn scroll_office(&mut self, delta: isize) -> AppResult<()> {
        let (len, current) = match &self.widget {
            Widget::OfficeWheel {
                candidates,
                selected,
            } => (candidates.len(), *selected),
            _ => return Err(inactive("office", self.mode())),
        };
        let target = current.saturating_add_signed(delta).min(len - 1);
        self.select_office(target)
    }

    pub fn set_date(&mut self, d: NaiveDate) -> AppResult<()> {
        let mode = self.mode();
        match &mut self.widget {
            Widget::DateWheel(current) => {
                *current = d;
                Ok(())
            }
            _ => Err(inactive("date", mode)),
        }
    }

    pub fn set_time(&mut self, t: NaiveTime) -> AppResult<()> {
        let mode = self.mode();
        match &mut self.widget {
            Widget::TimeWheel { value, .. } => {
                *value = t;
                Ok(())
            }
            _ => Err(inactive("time", mode)),
        }
    }

    /// Value the active widget currently shows.
    pub fn current_value(&self) -> PickerValue {
        match &self.widget {
            Widget::OfficeWheel {
                candidates,
                selected,
            } => PickerValue::Office(candidates[*selected].clone()),
            Widget::DateWheel(d) => PickerValue::Date(*d),
            Widget::TimeWheel {
                is_time_in: true,
                value,
            } => PickerValue::TimeIn(*value),
            Widget::TimeWheel {
                is_time_in: false,
                value,
            } => PickerValue::TimeOut(*value),
        }
    }

    /// Emit the active widget's value and close.
    pub fn confirm(self) {
        let result = PickerResult {
            row: self.row,
            value: self.current_value(),
        };
        (self.on_result)(result);
    }

    /// Close without emitting.
    pub fn cancel(self) {}
}

fn inactive(widget: &str, mode: PickerMode) -> AppError {
    AppError::Picker(format!(
        "the {} widget is not active in {:?} mode",
        widget, mode
    ))
}
