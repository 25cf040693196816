use crate::store::{bad_id, ClichePair, SEED_PAIRS};

/// Ordered set of cliche pairs plus the id counter.
///
/// Ids come from a counter that only moves forward, so an id is never handed
/// out twice even after the pair holding it is deleted. Lookups are a linear
/// scan in insertion order.
#[derive(Debug, Clone)]
pub struct Collection {
    pairs: Vec<ClichePair>,
    next_id: u64,
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

impl Collection {
    pub fn new() -> Self {
        Self {
            pairs: Vec::new(),
            next_id: 1,
        }
    }

    /// Collection holding the three built-in pairs with ids 1..=3.
    pub fn seeded() -> Self {
        let mut collection = Self::new();
        for (cliche, counter) in SEED_PAIRS {
            collection.insert(cliche.to_string(), counter.to_string());
        }
        collection
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Id the next created pair will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn pairs(&self) -> &[ClichePair] {
        &self.pairs
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.pairs.iter().position(|p| p.id == id)
    }

    fn insert(&mut self, cliche: String, counter: String) -> &ClichePair {
        let id = self.next_id;
        self.next_id += 1;
        self.pairs.push(ClichePair {
            id,
            cliche,
            counter,
        });
        &self.pairs[self.pairs.len() - 1]
    }

    pub fn read_all(&self) -> String {
        let mut msg = String::from("\n");
        for pair in &self.pairs {
            msg.push_str(&pair.render_line());
        }
        msg
    }

    pub fn read_one(&self, id: u64) -> String {
        match self.position(id) {
            Some(idx) => format!("\n{}", self.pairs[idx].render_line()),
            None => bad_id(id),
        }
    }

    pub fn create(&mut self, cliche: String, counter: String) -> String {
        let pair = self.insert(cliche, counter);
        format!("\nCreated: {} {}\n", pair.cliche, pair.counter)
    }

    pub fn edit(&mut self, id: u64, cliche: String, counter: String) -> String {
        let Some(idx) = self.position(id) else {
            return bad_id(id);
        };
        let msg = format!("\nCliche edited: {} {}\n", cliche, counter);
        let pair = &mut self.pairs[idx];
        pair.cliche = cliche;
        pair.counter = counter;
        msg
    }

    pub fn delete(&mut self, id: u64) -> String {
        match self.position(id) {
            Some(idx) => {
                self.pairs.remove(idx);
                format!("\nCliche {} deleted\n", id)
            }
            None => bad_id(id),
        }
    }

    /// True when `id` is currently present.
    pub fn contains(&self, id: u64) -> bool {
        self.position(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_collection_lists_three_pairs_in_order() {
        let c = Collection::seeded();
        assert_eq!(c.len(), 3);
        assert_eq!(c.next_id(), 4);
        assert_eq!(
            c.read_all(),
            "\n\
             1: Out of sight, out of mind.  Absence makes the heart grow fonder.\n\
             2: A penny saved is a penny earned.  Penny-wise and dollar-foolish.\n\
             3: He who hesitates is lost.  Look before you leap.\n"
        );
    }

    #[test]
    fn empty_collection_lists_a_single_newline() {
        assert_eq!(Collection::new().read_all(), "\n");
    }

    #[test]
    fn create_appends_and_reports() {
        let mut c = Collection::new();
        let msg = c.create("Haste makes waste.".into(), "Strike while the iron is hot.".into());
        assert_eq!(msg, "\nCreated: Haste makes waste. Strike while the iron is hot.\n");
        assert_eq!(
            c.read_one(1),
            "\n1: Haste makes waste.  Strike while the iron is hot.\n"
        );
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut c = Collection::new();
        c.create("a".into(), "b".into());
        c.create("c".into(), "d".into());
        assert_eq!(c.delete(2), "\nCliche 2 deleted\n");
        c.create("e".into(), "f".into());
        let ids: Vec<u64> = c.pairs().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn edit_overwrites_text_and_keeps_id() {
        let mut c = Collection::seeded();
        assert_eq!(c.edit(2, "x".into(), "y".into()), "\nCliche edited: x y\n");
        assert_eq!(c.read_one(2), "\n2: x  y\n");
        assert_eq!(c.pairs()[1].id, 2);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn unknown_ids_get_bad_id_replies() {
        let mut c = Collection::seeded();
        assert_eq!(c.read_one(9999), "\nBad Id: 9999\n");
        assert_eq!(c.edit(0, "x".into(), "y".into()), "\nBad Id: 0\n");
        assert_eq!(c.delete(42), "\nBad Id: 42\n");
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn delete_closes_the_gap() {
        let mut c = Collection::seeded();
        c.delete(1);
        assert!(!c.contains(1));
        assert_eq!(
            c.read_all(),
            "\n\
             2: A penny saved is a penny earned.  Penny-wise and dollar-foolish.\n\
             3: He who hesitates is lost.  Look before you leap.\n"
        );
        assert_eq!(c.delete(1), "\nBad Id: 1\n");
    }
}
