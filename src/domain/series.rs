//! Date-range series over an effort store
//!
//! [`EffortSeries`] walks a closed date range one calendar day at a time and
//! emits a per-task effort map for every day, either raw daily values or
//! running cumulative totals. [`GraphSeries`] and [`SummaryTotals`] are the
//! two materialized views built on top of it, consumed by the render layer.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use super::effort::{EffortError, EffortStore, Task};

/// Lazy day-by-day iterator over task efforts in a closed date range
///
/// Yields `(day, name -> value)` pairs in strictly ascending day order with
/// no gaps; days with no recorded effort emit zeros. In cumulative mode the
/// walk starts at the store's earliest data day so that totals include
/// effort recorded before the requested window, but only days inside the
/// window are emitted.
///
/// Each call to [`EffortStore::efforts`] builds a fresh iterator; a single
/// pass is all the summary and chart consumers need.
pub struct EffortSeries<'a> {
    tasks: Vec<(String, &'a Task)>,
    cursor: NaiveDate,
    emit_from: NaiveDate,
    end: NaiveDate,
    cumulative: bool,
    running: BTreeMap<String, f64>,
}

impl Iterator for EffortSeries<'_> {
    type Item = (NaiveDate, BTreeMap<String, f64>);

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor <= self.end {
            let date = self.cursor;
            self.cursor = date.checked_add_days(Days::new(1))?;

            let mut efforts = BTreeMap::new();
            for (name, task) in &self.tasks {
                let effort = task.effort_on(date);
                if self.cumulative {
                    *self.running.entry(name.clone()).or_insert(0.0) += effort;
                } else {
                    efforts.insert(name.clone(), effort);
                }
            }

            if date >= self.emit_from {
                let snapshot = if self.cumulative {
                    self.running.clone()
                } else {
                    efforts
                };
                return Some((date, snapshot));
            }
        }
        None
    }
}

/// Materialized chart input: one x column per day, one y series per task
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSeries {
    /// Requested axis start; may precede the first data point
    pub window_start: NaiveDate,
    /// Requested axis end; may follow the last data point
    pub window_end: NaiveDate,
    /// Sampled days, ascending; bounded by the store's actual data window
    pub dates: Vec<NaiveDate>,
    /// Per-task value columns, in requested task order, aligned with `dates`
    pub series: Vec<(String, Vec<f64>)>,
}

impl GraphSeries {
    /// Returns the largest plotted value across all series, or 0 if empty
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|(_, values)| values.iter().copied())
            .fold(0.0, f64::max)
    }
}

/// Total and per-day average effort for one set of tasks
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Totals {
    pub effort: f64,
    pub per_day: f64,
}

/// Trailing block of a summary report
///
/// `day_count` spans from the store's earliest data day through the report's
/// end day. `subset` is present only when the report covered an explicit
/// task subset.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SummaryTotals {
    pub day_count: i64,
    pub subset: Option<Totals>,
    pub overall: Totals,
}

impl EffortStore {
    /// Builds the day-by-day effort series for the given tasks and range
    ///
    /// `start` and `end` are truncated to their calendar days. Fails with
    /// [`EffortError::NoData`] on a store without data and
    /// [`EffortError::UnknownTask`] for any name never added.
    pub fn efforts(
        &self,
        task_names: &[String],
        start: NaiveDateTime,
        end: NaiveDateTime,
        cumulative: bool,
    ) -> Result<EffortSeries<'_>, EffortError> {
        let min_date = self.min_date().ok_or(EffortError::NoData)?;
        let tasks = task_names
            .iter()
            .map(|name| Ok((name.clone(), self.task(name)?)))
            .collect::<Result<Vec<_>, EffortError>>()?;

        let start = start.date();
        let end = end.date();
        let cursor = if cumulative { min_date } else { start };

        Ok(EffortSeries {
            tasks,
            cursor,
            emit_from: start,
            end,
            cumulative,
            running: BTreeMap::new(),
        })
    }

    /// Builds chart series for the given tasks over a display window
    ///
    /// The display axis keeps the requested window, but values are sampled
    /// only over its overlap with the store's actual data window, so lines
    /// never extrapolate past recorded effort.
    pub fn graph_series(
        &self,
        task_names: &[String],
        start: NaiveDateTime,
        end: NaiveDateTime,
        cumulative: bool,
    ) -> Result<GraphSeries, EffortError> {
        let min_date = self.min_date().ok_or(EffortError::NoData)?;
        let max_date = self.max_date().ok_or(EffortError::NoData)?;

        let window_start = start.date();
        let window_end = end.date();
        let plot_start = window_start.max(min_date);
        let plot_end = window_end.min(max_date);

        let mut dates = Vec::new();
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); task_names.len()];

        if plot_start <= plot_end {
            let series = self.efforts(
                task_names,
                plot_start.and_time(NaiveTime::MIN),
                plot_end.and_time(NaiveTime::MIN),
                cumulative,
            )?;
            for (date, efforts) in series {
                dates.push(date);
                for (column, name) in columns.iter_mut().zip(task_names) {
                    column.push(efforts.get(name).copied().unwrap_or(0.0));
                }
            }
        } else {
            // Validate names even when the windows do not overlap
            for name in task_names {
                self.task(name)?;
            }
        }

        Ok(GraphSeries {
            window_start,
            window_end,
            dates,
            series: task_names.iter().cloned().zip(columns).collect(),
        })
    }

    /// Computes the totals block for a summary ending on the given day
    pub fn summary_totals(
        &self,
        subset: Option<&[String]>,
        end: NaiveDateTime,
    ) -> Result<SummaryTotals, EffortError> {
        let min_date = self.min_date().ok_or(EffortError::NoData)?;
        let day_count = (end.date() - min_date).num_days() + 1;

        let totals = |effort: f64| Totals {
            effort,
            per_day: effort / day_count as f64,
        };

        let subset = match subset {
            Some(names) => Some(totals(self.total_effort(Some(names))?)),
            None => None,
        };
        let overall = totals(self.total_effort(None)?);

        Ok(SummaryTotals {
            day_count,
            subset,
            overall,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use proptest::prelude::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample_store() -> EffortStore {
        let mut store = EffortStore::new();
        store.add_effort("MUSIC", at(2014, 2, 1), 1.0);
        store.add_effort("MUSIC", at(2014, 2, 1), 2.0);
        store.add_effort("CHESS", at(2014, 2, 2), 3.0);
        store.add_effort("CHESS", at(2014, 2, 2), 4.0);
        store.add_effort("CHESS", at(2014, 2, 3), 5.0);
        store
    }

    #[test]
    fn cumulative_series_carries_running_totals() {
        let store = sample_store();
        let emitted: Vec<_> = store
            .efforts(&names(&["MUSIC", "CHESS"]), at(2014, 2, 1), at(2014, 2, 3), true)
            .unwrap()
            .collect();

        assert_eq!(emitted.len(), 3);

        let (date, efforts) = &emitted[0];
        assert_eq!(*date, day(2014, 2, 1));
        assert_eq!(efforts["MUSIC"], 3.0);
        assert_eq!(efforts["CHESS"], 0.0);

        let (date, efforts) = &emitted[1];
        assert_eq!(*date, day(2014, 2, 2));
        assert_eq!(efforts["MUSIC"], 3.0);
        assert_eq!(efforts["CHESS"], 7.0);

        let (date, efforts) = &emitted[2];
        assert_eq!(*date, day(2014, 2, 3));
        assert_eq!(efforts["MUSIC"], 3.0);
        assert_eq!(efforts["CHESS"], 12.0);
    }

    #[test]
    fn daily_series_emits_every_day_without_gaps() {
        let store = sample_store();
        let emitted: Vec<_> = store
            .efforts(&names(&["CHESS"]), at(2014, 1, 30), at(2014, 2, 4), false)
            .unwrap()
            .collect();

        assert_eq!(emitted.len(), 6);
        let mut expected = day(2014, 1, 30);
        for (date, _) in &emitted {
            assert_eq!(*date, expected);
            expected = expected.succ_opt().unwrap();
        }
        // Days outside the data still appear, with zeros
        assert_eq!(emitted[0].1["CHESS"], 0.0);
        assert_eq!(emitted[3].1["CHESS"], 7.0);
    }

    #[test]
    fn cumulative_window_includes_effort_before_start() {
        let store = sample_store();
        let emitted: Vec<_> = store
            .efforts(&names(&["MUSIC", "CHESS"]), at(2014, 2, 3), at(2014, 2, 3), true)
            .unwrap()
            .collect();

        // Only the requested day is emitted, but its totals cover the
        // walked-up history from 2014-02-01
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].0, day(2014, 2, 3));
        assert_eq!(emitted[0].1["MUSIC"], 3.0);
        assert_eq!(emitted[0].1["CHESS"], 12.0);
    }

    #[test]
    fn cumulative_final_day_matches_total_effort() {
        let store = sample_store();
        let subset = names(&["CHESS"]);
        let last = store
            .efforts(&subset, at(2014, 2, 1), at(2014, 2, 3), true)
            .unwrap()
            .last()
            .unwrap();

        assert_eq!(last.1["CHESS"], store.total_effort(Some(&subset)).unwrap());
    }

    #[test]
    fn empty_range_emits_nothing() {
        let store = sample_store();
        let emitted: Vec<_> = store
            .efforts(&names(&["MUSIC"]), at(2014, 2, 3), at(2014, 2, 1), false)
            .unwrap()
            .collect();
        assert!(emitted.is_empty());
    }

    #[test]
    fn empty_store_is_a_usage_error() {
        let store = EffortStore::new();
        let err = store
            .efforts(&[], at(2014, 2, 1), at(2014, 2, 3), false)
            .err()
            .unwrap();
        assert_eq!(err, EffortError::NoData);
        assert_eq!(
            store.summary_totals(None, at(2014, 2, 3)).err().unwrap(),
            EffortError::NoData
        );
    }

    #[test]
    fn unknown_task_fails_series_construction() {
        let store = sample_store();
        let err = store
            .efforts(&names(&["MUSIC", "GOLF"]), at(2014, 2, 1), at(2014, 2, 3), false)
            .err()
            .unwrap();
        assert_eq!(err, EffortError::UnknownTask("GOLF".into()));
    }

    #[test]
    fn graph_series_clamps_to_data_window() {
        let store = sample_store();
        let graph = store
            .graph_series(&names(&["MUSIC", "CHESS"]), at(2014, 1, 25), at(2014, 2, 10), true)
            .unwrap();

        // Axis keeps the requested window
        assert_eq!(graph.window_start, day(2014, 1, 25));
        assert_eq!(graph.window_end, day(2014, 2, 10));

        // Lines stop at the data
        assert_eq!(graph.dates.first(), Some(&day(2014, 2, 1)));
        assert_eq!(graph.dates.last(), Some(&day(2014, 2, 3)));
        assert_eq!(graph.dates.len(), 3);

        let chess = &graph.series[1];
        assert_eq!(chess.0, "CHESS");
        assert_eq!(chess.1, vec![0.0, 7.0, 12.0]);
        assert_eq!(graph.max_value(), 12.0);
    }

    #[test]
    fn graph_series_disjoint_window_is_empty() {
        let store = sample_store();
        let graph = store
            .graph_series(&names(&["MUSIC"]), at(2015, 1, 1), at(2015, 1, 31), true)
            .unwrap();
        assert!(graph.dates.is_empty());
        assert_eq!(graph.series[0].1, Vec::<f64>::new());
    }

    #[test]
    fn summary_totals_cover_min_date_to_end() {
        let store = sample_store();
        let subset = names(&["MUSIC"]);
        let totals = store
            .summary_totals(Some(&subset), at(2014, 2, 3))
            .unwrap();

        assert_eq!(totals.day_count, 3);
        assert_eq!(totals.subset.unwrap().effort, 3.0);
        assert_eq!(totals.subset.unwrap().per_day, 1.0);
        assert_eq!(totals.overall.effort, 15.0);
        assert_eq!(totals.overall.per_day, 5.0);
    }

    proptest! {
        /// Non-cumulative emission count is exactly the range length
        #[test]
        fn daily_emission_count(start_off in 0u64..20, len in 0u64..20) {
            let store = sample_store();
            let start = day(2014, 1, 20).checked_add_days(Days::new(start_off)).unwrap();
            let end = start.checked_add_days(Days::new(len)).unwrap();

            let emitted: Vec<_> = store
                .efforts(
                    &names(&["MUSIC"]),
                    start.and_time(NaiveTime::MIN),
                    end.and_time(NaiveTime::MIN),
                    false,
                )
                .unwrap()
                .collect();

            prop_assert_eq!(emitted.len() as u64, len + 1);
            for window in emitted.windows(2) {
                prop_assert_eq!(window[0].0.succ_opt().unwrap(), window[1].0);
            }
        }

        /// Cumulative value on the final day equals the subset total up to it
        #[test]
        fn cumulative_matches_restricted_total(end_day in 1u32..6) {
            let store = sample_store();
            let subset = names(&["MUSIC", "CHESS"]);
            let last = store
                .efforts(&subset, at(2014, 2, 1), at(2014, 2, end_day), true)
                .unwrap()
                .last()
                .unwrap();

            for name in &subset {
                let mut expected = 0.0;
                let mut d = day(2014, 2, 1);
                while d <= day(2014, 2, end_day) {
                    expected += store.effort_on(name, d.and_time(NaiveTime::MIN)).unwrap();
                    d = d.succ_opt().unwrap();
                }
                prop_assert!((last.1[name] - expected).abs() < 1e-9);
            }
        }
    }
}
