const SECONDS_PER_HOUR: f64 = 3600.0;

/// Outcome of a playtime lookup
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum PlaytimeResult
{
    /// Playtime in seconds
    Known(u64),
    /// The lookup couldn't determine a playtime
    Unknown,
}

impl PlaytimeResult
{
    pub fn is_known(&self) -> bool
    {
        matches!(self, Self::Known(_))
    }

    /// The playtime in fractional hours, if known
    pub fn hours(&self) -> Option<f64>
    {
        match self
        {
            Self::Known(seconds) => Some(*seconds as f64 / SECONDS_PER_HOUR),
            Self::Unknown => None,
        }
    }

    /// The playtime rounded to whole hours, halves rounding up
    pub fn whole_hours(&self) -> Option<u64>
    {
        self.hours().map(|h| h.round() as u64)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hours()
    {
        assert_eq!(PlaytimeResult::Known(7200).hours(), Some(2.0));
        assert_eq!(PlaytimeResult::Known(5400).hours(), Some(1.5));
        assert_eq!(PlaytimeResult::Unknown.hours(), None);
    }

    #[test]
    fn whole_hours_rounding()
    {
        assert_eq!(PlaytimeResult::Known(7200).whole_hours(), Some(2));
        assert_eq!(PlaytimeResult::Known(5400).whole_hours(), Some(2));
        assert_eq!(PlaytimeResult::Known(5399).whole_hours(), Some(1));
        assert_eq!(PlaytimeResult::Known(1000).whole_hours(), Some(0));
        assert_eq!(PlaytimeResult::Unknown.whole_hours(), None);
        assert!(!PlaytimeResult::Unknown.is_known());
    }
}
