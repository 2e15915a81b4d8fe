use std::collections::HashMap;

/// Per test-name count of captured shader modules.
///
/// Counts never reset. A test that builds several pipelines under one name
/// gets one fixture family per shader module.
#[derive(Debug, Default, Clone)]
pub struct OccurrenceTracker {
    counts: HashMap<String, u32>,
}

impl OccurrenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&mut self, test_name: &str) -> u32 {
        let count = self.counts.entry(test_name.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn current(&self, test_name: &str) -> u32 {
        self.counts.get(test_name).copied().unwrap_or(0)
    }

    pub fn fixture_extension(&self, test_name: &str) -> String {
        fixture_extension(self.current(test_name))
    }
}

/// `.in.json` for the first occurrence, `.in<N>.json` after that.
pub fn fixture_extension(occurrence: u32) -> String {
    match occurrence {
        0 | 1 => ".in.json".to_string(),
        n => format!(".in{n}.json"),
    }
}
