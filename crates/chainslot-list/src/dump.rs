//! Graphviz rendering of the slot array.
//!
//! Debugging aid only: [`ArenaList::to_dot`] renders every physical slot as
//! a record node with its `prev`/`next` links, colours free slots, list
//! ends and interior nodes differently, and draws the free-list chain.
//! Payloads are not printed, so no `Debug` bound is needed.

use std::fmt::Write as _;

use crate::list::ArenaList;
use crate::slot::NIL;

const FREE_STYLE: &str = "fillcolor=green, color=darkgreen, fontcolor=darkgreen";
const END_STYLE: &str = "fillcolor=\"#ffc0cb\", color=\"#462759\", fontcolor=\"#462759\"";
const LIVE_STYLE: &str = "fillcolor=\"#add8e6\", color=\"#00008b\", fontcolor=\"#00008b\"";

impl<T> ArenaList<T> {
    /// Render the slot array as a Graphviz `digraph` titled `title`.
    pub fn to_dot(&self, title: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_dot(&mut out, title);
        out
    }

    fn write_dot(&self, out: &mut String, title: &str) -> std::fmt::Result {
        writeln!(out, "digraph G {{")?;
        writeln!(out, "\trankdir=LR")?;

        for index in 0..=self.capacity {
            let slot = &self.slots[index];
            let fields = format!(
                "<pos> physical pos\\n {index} | <prev> prev\\n {} | <next> next\\n {}",
                slot.prev, slot.next
            );
            if index == NIL {
                writeln!(out, "\t{index}[shape=record, label=\"{fields}\"];")?;
                continue;
            }
            let (style, prefix) = if !self.is_live(index) {
                (FREE_STYLE, "<free> free | ")
            } else if index == self.head || index == self.tail {
                (END_STYLE, "")
            } else {
                (LIVE_STYLE, "")
            };
            writeln!(
                out,
                "\t{index}[{style}, label=\"{prefix}{fields}\", style=filled, shape=record];"
            )?;
        }

        for index in 1..=self.capacity {
            if !self.is_live(index) {
                continue;
            }
            let slot = &self.slots[index];
            writeln!(out, "\t{index}:<next>->{}:<pos>;", slot.next)?;
            writeln!(out, "\t{index}:<prev>->{}:<pos>;", slot.prev)?;
        }

        let mut free = self.free_head;
        let mut steps = 0;
        while free != NIL && steps < self.capacity {
            let next = self.slots[free].next;
            if next != NIL {
                writeln!(out, "\t{free}:<free>->{next}:<free>;")?;
            }
            free = next;
            steps += 1;
        }

        writeln!(out, "\tlabelloc=\"t\"")?;
        writeln!(out, "\tlabel=\"{}\"", title.replace('"', "\\\""))?;
        writeln!(out, "}}")
    }
}

#[cfg(test)]
mod tests {
    use crate::ArenaList;

    #[test]
    fn dot_lists_every_slot() {
        let mut list = ArenaList::with_capacity(3);
        list.insert_after_head('a').unwrap();
        let dot = list.to_dot("demo");
        assert!(dot.starts_with("digraph G {"));
        for index in 0..=3 {
            assert!(dot.contains(&format!("\t{index}[")));
        }
        assert!(dot.contains("label=\"demo\""));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn dot_marks_free_chain() {
        let list: ArenaList<u8> = ArenaList::with_capacity(3);
        let dot = list.to_dot("free");
        assert!(dot.contains("1:<free>->2:<free>;"));
        assert!(dot.contains("2:<free>->3:<free>;"));
        assert_eq!(dot.matches("<free> free").count(), 3);
    }

    #[test]
    fn dot_draws_live_links() {
        let mut list = ArenaList::with_capacity(2);
        list.insert_after_head(1).unwrap();
        list.insert_after_head(2).unwrap();
        let dot = list.to_dot("live");
        assert!(dot.contains("1:<next>->2:<pos>;"));
        assert!(dot.contains("2:<prev>->1:<pos>;"));
    }

    #[test]
    fn title_quotes_are_escaped() {
        let list: ArenaList<u8> = ArenaList::with_capacity(1);
        assert!(list.to_dot("say \"hi\"").contains("label=\"say \\\"hi\\\"\""));
    }
}
