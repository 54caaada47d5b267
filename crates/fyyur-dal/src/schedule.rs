//! Splitting shows into past and upcoming ones.
//!
//! A show is upcoming only when it starts strictly after `now`, a show
//! starting in the current second already counts as past.

use time::{OffsetDateTime, PrimitiveDateTime};

/// Wall clock time, in the local offset when it can be determined.
pub fn current_time() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    PrimitiveDateTime::new(now.date(), now.time())
}

pub fn is_upcoming(start_time: PrimitiveDateTime, now: PrimitiveDateTime) -> bool {
    start_time > now
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> Timeline<T> {
    pub fn partition<I, F>(shows: I, now: PrimitiveDateTime, start_time: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> PrimitiveDateTime,
    {
        let (upcoming, past) = shows
            .into_iter()
            .partition(|show| is_upcoming(start_time(show), now));
        Timeline { past, upcoming }
    }
}

/// Collapses `(id, name, start_time)` rows of an outer join into one entry per id
/// with the number of upcoming shows. Rows must be ordered by id.
pub(crate) fn tally_upcoming<I>(rows: I, now: PrimitiveDateTime) -> Vec<(i64, String, usize)>
where
    I: IntoIterator<Item = (i64, String, Option<PrimitiveDateTime>)>,
{
    let mut res: Vec<(i64, String, usize)> = Vec::new();
    for (id, name, start_time) in rows {
        let upcoming = start_time.map(|t| is_upcoming(t, now)).unwrap_or(false) as usize;
        match res.last_mut() {
            Some(last) if last.0 == id => last.2 += upcoming,
            _ => res.push((id, name, upcoming)),
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;
    use time::{macros::datetime, Duration};

    use super::*;

    const NOW: PrimitiveDateTime = datetime!(2024-06-01 12:00:00);

    #[test]
    fn test_boundary_is_past() {
        assert!(!is_upcoming(NOW, NOW));
        assert!(is_upcoming(NOW + Duration::seconds(1), NOW));
        assert!(!is_upcoming(NOW - Duration::seconds(1), NOW));
    }

    #[test]
    fn test_partition_keeps_order() {
        let shows = vec![
            (1, NOW - Duration::days(3)),
            (2, NOW + Duration::days(1)),
            (3, NOW),
            (4, NOW + Duration::minutes(5)),
        ];
        let timeline = Timeline::partition(shows, NOW, |s| s.1);
        let past: Vec<i32> = timeline.past.iter().map(|s| s.0).collect();
        let upcoming: Vec<i32> = timeline.upcoming.iter().map(|s| s.0).collect();
        assert_eq!(past, vec![1, 3]);
        assert_eq!(upcoming, vec![2, 4]);
    }

    #[test]
    fn test_tally_upcoming() {
        let rows = vec![
            (1, "The Musical Hop".to_string(), Some(NOW + Duration::days(1))),
            (1, "The Musical Hop".to_string(), Some(NOW - Duration::days(1))),
            (1, "The Musical Hop".to_string(), Some(NOW + Duration::days(2))),
            (2, "The Dueling Pianos Bar".to_string(), None),
            (3, "Park Square Live Music & Coffee".to_string(), Some(NOW)),
        ];
        let tally = tally_upcoming(rows, NOW);
        assert_eq!(
            tally,
            vec![
                (1, "The Musical Hop".to_string(), 2),
                (2, "The Dueling Pianos Bar".to_string(), 0),
                (3, "Park Square Live Music & Coffee".to_string(), 0),
            ]
        );
    }

    #[quickcheck]
    fn test_partition_is_complete(offsets: Vec<i32>) -> bool {
        let times: Vec<PrimitiveDateTime> = offsets
            .iter()
            .map(|o| NOW + Duration::seconds(*o as i64))
            .collect();
        let timeline = Timeline::partition(times.clone(), NOW, |t| *t);
        timeline.past.len() + timeline.upcoming.len() == times.len()
            && timeline.upcoming.iter().all(|t| *t > NOW)
            && timeline.past.iter().all(|t| *t <= NOW)
    }
}
