//! Ticker list parsed from a single space-separated argument.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerSet {
    raw: String,
    symbols: Vec<String>,
}

impl TickerSet {
    /// Split on whitespace, keeping order, repeats and case as given.
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            symbols: raw.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// At most one symbol: the provider answers with a flat series.
    pub fn is_single(&self) -> bool {
        self.symbols.len() <= 1
    }

    /// Symbols in first-seen order with repeats removed.
    pub fn distinct(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::with_capacity(self.symbols.len());
        for symbol in &self.symbols {
            if !out.contains(&symbol.as_str()) {
                out.push(symbol);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_whitespace() {
        let set = TickerSet::parse("AMZN  MSFT\tgoog");
        assert_eq!(set.symbols(), ["AMZN", "MSFT", "goog"]);
        assert_eq!(set.raw(), "AMZN  MSFT\tgoog");
        assert!(!set.is_single());
    }

    #[test]
    fn parse_keeps_duplicates() {
        let set = TickerSet::parse("X Y X");
        assert_eq!(set.len(), 3);
        assert_eq!(set.distinct(), ["X", "Y"]);
    }

    #[test]
    fn single_and_empty_are_single() {
        assert!(TickerSet::parse("AMZN").is_single());
        assert!(TickerSet::parse("  AMZN ").is_single());
        assert!(TickerSet::parse("").is_single());
        assert!(TickerSet::parse("").is_empty());
    }
}
