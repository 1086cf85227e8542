//! Drag scripts and the headless replayer that runs them.

use std::path::Path;

use serde::Serialize;
use sortboard::{BoardConfig, BoardView, DragEvent, MoveRecord, Point, ViewOutcome};
use tracing::{debug, info};

use crate::error::{HarnessError, Result};
use crate::seed::{COLUMNS, Task, seed_lists};
use crate::surface::{
    CARD_HEIGHT, HeadlessSurface, column_rect, drain, layout, prune, slot_rect, surfaces_for,
};

/// Read a JSON array of drag events.
pub fn load_script(path: &Path) -> Result<Vec<DragEvent>> {
    let content = std::fs::read_to_string(path)?;
    parse_script(&content)
}

pub fn parse_script(content: &str) -> Result<Vec<DragEvent>> {
    Ok(serde_json::from_str(content)?)
}

/// Load a board config, choosing the parser by file extension.
pub fn load_config(path: &Path) -> Result<BoardConfig> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(BoardConfig::from_toml_file(path)?),
        Some("json") => Ok(BoardConfig::from_json_str(&std::fs::read_to_string(path)?)?),
        other => Err(HarnessError::invalid(format!(
            "unsupported config extension {other:?} for {}; expected .toml or .json",
            path.display()
        ))),
    }
}

/// A seeded board rendered onto headless surfaces.
#[derive(Debug)]
pub struct Replayer {
    view: BoardView<Task>,
    surfaces: Vec<HeadlessSurface>,
    moves: Vec<MoveRecord>,
    transitions: usize,
}

impl Replayer {
    pub fn new(config: &BoardConfig) -> Result<Self> {
        let view = BoardView::new(seed_lists(), config);
        let mut surfaces = surfaces_for(&view);
        layout(&view, &mut surfaces)?;
        let mut replayer = Self {
            view,
            surfaces,
            moves: Vec::new(),
            transitions: 0,
        };
        replayer.view.sync(&mut replayer.surfaces)?;
        Ok(replayer)
    }

    pub fn view(&self) -> &BoardView<Task> {
        &self.view
    }

    /// Apply one event: dispatch, lay out, animate, and let every transition
    /// finish.
    pub fn apply(&mut self, event: DragEvent) -> Result<ViewOutcome> {
        let outcome = self.view.dispatch(event, &mut self.surfaces)?;
        if let ViewOutcome::Dropped(Some(record)) = &outcome {
            self.moves.push(record.clone());
        }
        layout(&self.view, &mut self.surfaces)?;
        self.view.sync(&mut self.surfaces)?;
        self.transitions += drain(&mut self.view, &mut self.surfaces)?;
        prune(&self.view, &mut self.surfaces);
        Ok(outcome)
    }

    /// Apply `events` in order, naming the failing step on error.
    pub fn run(&mut self, events: Vec<DragEvent>) -> Result<()> {
        let total = events.len();
        for (step, event) in events.into_iter().enumerate() {
            let name = format!("{event:?}");
            self.apply(event).map_err(|err| match err {
                HarnessError::View(source) => HarnessError::Step {
                    step,
                    event: name,
                    source,
                },
                other => other,
            })?;
        }
        info!(steps = total, moves = self.moves.len(), "script finished");
        Ok(())
    }

    pub fn report(&self) -> BoardReport {
        let columns = self
            .view
            .board()
            .lists()
            .iter()
            .enumerate()
            .map(|(list, items)| ColumnReport {
                name: COLUMNS.get(list).map_or_else(|| format!("List {list}"), |n| n.to_string()),
                cards: items
                    .iter()
                    .map(|item| CardReport {
                        id: item.id.to_string(),
                        title: item.payload.title.clone(),
                    })
                    .collect(),
            })
            .collect();
        let moves = self
            .moves
            .iter()
            .map(|record| MoveReport {
                item: record.item_id.to_string(),
                from_list: record.from_list,
                from_index: record.from_index,
                to_list: record.to_list,
                to_index: record.to_index,
            })
            .collect();
        BoardReport {
            columns,
            moves,
            transitions: self.transitions,
        }
    }
}

/// The drag gestures of one card from `from` to before or after `to`.
///
/// The pointer travels in the direction of the drop side, so the tracker
/// agrees with the classified side.
pub fn drag_card(from: (usize, usize), to: (usize, usize), after: bool) -> Vec<DragEvent> {
    let (to_list, to_index) = to;
    let target = slot_rect(to_list, to_index);
    let x = target.x + 10.0;
    let ys: [f32; 3] = if after {
        [target.y, target.y + CARD_HEIGHT / 2.0, target.bottom() - 4.0]
    } else {
        [target.bottom(), target.y + CARD_HEIGHT / 2.0 + 1.0, target.y + 4.0]
    };

    let mut events = vec![DragEvent::DragStart {
        list: from.0,
        index: from.1,
    }];
    if from.0 != to_list {
        events.push(DragEvent::DragLeave {
            list: from.0,
            list_rect: column_rect(from.0),
            pointer: Point::new(x, ys[0]),
        });
        events.push(DragEvent::DragEnter { list: to_list });
    }
    events.extend(ys.iter().map(|&y| DragEvent::PointerMove {
        pointer: Point::new(x, y),
    }));
    events.push(DragEvent::DragOver {
        list: to_list,
        index: to_index,
        item_rect: target,
        pointer: Point::new(x, ys[2]),
    });
    events.push(DragEvent::Drop { list: to_list });
    events.push(DragEvent::DragEnd);
    debug!(?from, ?to, after, events = events.len(), "scripted drag");
    events
}

/// The built-in demo: a card crosses to Done, another is reordered inside
/// Doing, Doing is emptied into Todo, and a card is dropped into the empty
/// column.
pub fn demo_script() -> Vec<DragEvent> {
    let mut events = Vec::new();
    // "Fix bugs" to the top of Done.
    events.extend(drag_card((0, 1), (2, 0), false));
    // "Improving performance" below "Researching drag-n-drop libraries".
    events.extend(drag_card((1, 0), (1, 1), true));
    // Both Doing cards over to Todo.
    events.extend(drag_card((1, 0), (0, 1), true));
    events.extend(drag_card((1, 0), (0, 0), true));
    // "Develop a UI" into the now empty Doing column.
    events.push(DragEvent::DragStart { list: 0, index: 0 });
    events.push(DragEvent::DragEnter { list: 1 });
    events.push(DragEvent::Drop { list: 1 });
    events.push(DragEvent::DragEnd);
    events
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardReport {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnReport {
    pub name: String,
    pub cards: Vec<CardReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub item: String,
    pub from_list: usize,
    pub from_index: usize,
    pub to_list: usize,
    pub to_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardReport {
    pub columns: Vec<ColumnReport>,
    pub moves: Vec<MoveReport>,
    pub transitions: usize,
}

impl BoardReport {
    /// Card titles per column, for assertions.
    pub fn titles(&self) -> Vec<Vec<&str>> {
        self.columns
            .iter()
            .map(|column| column.cards.iter().map(|card| card.title.as_str()).collect())
            .collect()
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for column in &self.columns {
            out.push_str(&format!("{} ({})\n", column.name, column.cards.len()));
            for card in &column.cards {
                out.push_str(&format!("  [{}] {}\n", card.id, card.title));
            }
        }
        for record in &self.moves {
            out.push_str(&format!(
                "moved {}: {}:{} -> {}:{}\n",
                record.item, record.from_list, record.from_index, record.to_list, record.to_index
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_script_produces_expected_board() {
        let mut replayer = Replayer::new(&BoardConfig::default()).unwrap();
        replayer.run(demo_script()).unwrap();
        let report = replayer.report();
        assert_eq!(
            report.titles(),
            vec![
                vec![
                    "Improving performance",
                    "Add light theme",
                    "Researching drag-n-drop libraries"
                ],
                vec!["Develop a UI"],
                vec!["Fix bugs", "Choose a framework"],
            ]
        );
        assert_eq!(report.moves.len(), 5);
        assert!(report.transitions > 0);
        assert!(!replayer.view().board().is_dragging());
        for list in replayer.view().lists() {
            assert!(list.animator().is_settled());
        }
    }

    #[test]
    fn drag_card_within_a_column() {
        let mut replayer = Replayer::new(&BoardConfig::default()).unwrap();
        replayer.run(drag_card((0, 0), (0, 2), true)).unwrap();
        assert_eq!(
            replayer.report().titles()[0],
            vec!["Fix bugs", "Add light theme", "Develop a UI"]
        );
    }

    #[test]
    fn failing_step_is_reported() {
        let mut replayer = Replayer::new(&BoardConfig::default()).unwrap();
        let err = replayer
            .run(vec![
                DragEvent::DragStart { list: 0, index: 0 },
                DragEvent::DragStart { list: 1, index: 0 },
            ])
            .unwrap_err();
        assert!(matches!(err, HarnessError::Step { step: 1, .. }));
    }

    #[test]
    fn text_report_lists_columns() {
        let replayer = Replayer::new(&BoardConfig::default()).unwrap();
        let text = replayer.report().render_text();
        assert!(text.starts_with("Todo (3)\n  [1] Develop a UI\n"));
        assert!(text.contains("Done (1)\n  [6] Choose a framework\n"));
    }
}
