use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

/// Name of a day. Each day corresponds to one sheet of the workbook.
pub type Day = String;

/// Name of a meal within a day, e.g. `Breakfast`.
pub type Meal = String;

/// Meal name → ordered item list for a single day.
pub type DayMenu = BTreeMap<Meal, Vec<String>>;

/// Raw rows of a single sheet, as produced by the spreadsheet loader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRows {
    /// Sheet name, used verbatim as the day key.
    pub name: String,
    /// Rows of stringified cells in sheet order.
    pub rows: Vec<Vec<String>>,
}

impl SheetRows {
    /// Creates a sheet from anything that yields rows of cell strings.
    pub fn new<N, R, C>(name: N, rows: R) -> Self
    where
        N: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            name: name.into(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

/// The weekly menu: day → meal → ordered items.
///
/// A table is only ever produced whole, either by [`MenuTable::build`] or by
/// deserializing a previously written menu, and is never mutated afterwards.
/// Days and meals are kept in key order so that serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuTable {
    days: BTreeMap<Day, DayMenu>,
}

impl MenuTable {
    /// Builds the table from the raw rows of every sheet.
    ///
    /// The first cell of a row names the meal and the second holds the
    /// comma-separated items. Each item is trimmed and blank items are
    /// dropped. Fully blank rows are skipped. When a meal appears twice in one
    /// sheet the later row replaces the earlier one.
    pub fn build(sheets: &[SheetRows]) -> Result<Self> {
        let mut days = BTreeMap::new();

        for sheet in sheets {
            let mut meals = DayMenu::new();

            for (index, row) in sheet.rows.iter().enumerate() {
                if row.iter().all(|cell| cell.trim().is_empty()) {
                    continue;
                }

                let malformed = |reason: &str| MenuError::MalformedRow {
                    sheet: sheet.name.clone(),
                    row: index + 1,
                    reason: reason.to_string(),
                };

                let [meal_cell, items_cell, ..] = row.as_slice() else {
                    return Err(malformed("expected a meal name and an item list"));
                };

                let meal = meal_cell.trim();
                if meal.is_empty() {
                    return Err(malformed("meal name is empty"));
                }

                meals.insert(meal.to_string(), split_items(items_cell));
            }

            days.insert(sheet.name.clone(), meals);
        }

        Ok(Self { days })
    }

    /// Returns the items recorded for `meal` on `day`.
    ///
    /// `None` means the day or the meal is unknown, which is different from a
    /// known meal with no items (`Some(&[])`).
    pub fn items_for(&self, day: &str, meal: &str) -> Option<&[String]> {
        self.days
            .get(day)
            .and_then(|meals| meals.get(meal))
            .map(Vec::as_slice)
    }

    /// Number of items for the pair, or zero when it is unknown.
    pub fn count_for(&self, day: &str, meal: &str) -> usize {
        self.items_for(day, meal).map_or(0, <[String]>::len)
    }

    /// Checks whether `item` is served for the pair, ignoring case.
    pub fn contains_item(&self, day: &str, meal: &str, item: &str) -> bool {
        let needle = item.to_lowercase();
        self.items_for(day, meal).is_some_and(|items| {
            items
                .iter()
                .any(|candidate| candidate.to_lowercase() == needle)
        })
    }

    /// Builds a display record for the pair, if it exists.
    pub fn meal_instance(&self, day: &str, meal: &str, date: &str) -> Option<MealInstance> {
        self.items_for(day, meal)
            .map(|items| MealInstance::new(day, date, meal, items.to_vec()))
    }

    /// Iterates over the day names in key order.
    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    /// Returns the meals of a single day.
    pub fn meals(&self, day: &str) -> Option<&DayMenu> {
        self.days.get(day)
    }

    /// Number of days in the table.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the table holds no days at all.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of meals across every day.
    pub fn meal_count(&self) -> usize {
        self.days.values().map(BTreeMap::len).sum()
    }
}

impl fmt::Display for MenuTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (day, meals) in &self.days {
            writeln!(f, "{day}")?;
            for (meal, items) in meals {
                if items.is_empty() {
                    writeln!(f, "  {meal}: (none)")?;
                } else {
                    writeln!(f, "  {meal}: {}", items.join(", "))?;
                }
            }
        }
        Ok(())
    }
}

fn split_items(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// A single meal on a given date, used for reporting only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealInstance {
    pub day: Day,
    pub date: String,
    pub meal: Meal,
    pub items: Vec<String>,
}

impl MealInstance {
    pub fn new(
        day: impl Into<Day>,
        date: impl Into<String>,
        meal: impl Into<Meal>,
        items: Vec<String>,
    ) -> Self {
        Self {
            day: day.into(),
            date: date.into(),
            meal: meal.into(),
            items,
        }
    }
}

impl fmt::Display for MealInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}), {} meal:", self.day, self.date, self.meal)?;
        for item in &self.items {
            writeln!(f, "- {item}")?;
        }
        Ok(())
    }
}
