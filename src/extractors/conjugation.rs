//! Conjugation table parsing.
//!
//! Verb sections carry one or more inflection tables. Rows come in five
//! shapes: full-width section headers naming a mood block, left-rail tense
//! rows (indicative/subjunctive), imperative rows, non-finite form rows, and
//! merged-header continuation rows. Forms are decoded positionally from the
//! data cells; the vós column is skipped throughout. Cells that record
//! several dialect variants are resolved against the footnote marker set.

use std::collections::HashSet;

use crate::config::{
    RowRole, FINITE_PERSONS, IMPERATIVE_PERSONS, INFLECTION_TABLE_LABEL, NONFINITE_PERSONS,
    ROW_ROLES, VARIANT_SEPARATOR,
};
use crate::markup::{Node, NodeKind};
use crate::model::{ConjugationBlock, ConjugationForm, ConjugationTense};

use super::footnotes::is_marker;

/// Parse every conjugation table in a category section.
///
/// Blocks are concatenated across tables in document order, rows in document
/// order within a table. A block is emitted only when the next section-header
/// row flushes it; a block with no tenses, or one still under construction
/// when its table ends, is dropped.
pub fn conjugation_blocks(section: &[Node], markers: &HashSet<String>) -> Vec<ConjugationBlock> {
    let mut tables = Vec::new();
    for node in section {
        collect_tables(node, &mut tables);
    }

    let mut out = Vec::new();
    for table in &tables {
        parse_table(table, markers, &mut out);
    }

    log::debug!(
        "parsed {} conjugation blocks from {} tables",
        out.len(),
        tables.len()
    );
    out
}

fn collect_tables<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
    if node.kind == NodeKind::Table && node.has_label(INFLECTION_TABLE_LABEL) {
        out.push(node);
        return;
    }
    for child in &node.children {
        collect_tables(child, out);
    }
}

fn collect_rows<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
    if node.kind == NodeKind::TableRow {
        out.push(node);
        return;
    }
    for child in &node.children {
        collect_rows(child, out);
    }
}

/// Number of columns the table spans: the widest row by summed colspans.
fn table_width(rows: &[&Node]) -> u32 {
    rows.iter()
        .map(|row| {
            row.children
                .iter()
                .filter_map(|c| match c.kind {
                    NodeKind::TableCell { colspan, .. } => Some(colspan),
                    _ => None,
                })
                .sum::<u32>()
        })
        .max()
        .unwrap_or(0)
}

fn parse_table(table: &Node, markers: &HashSet<String>, out: &mut Vec<ConjugationBlock>) {
    let mut rows = Vec::new();
    for child in &table.children {
        collect_rows(child, &mut rows);
    }

    let width = table_width(&rows);
    let mut block = ConjugationBlock {
        name: String::new(),
        tenses: Vec::new(),
    };

    for row in rows {
        // Rule 1: section-header row, a header cell spanning the full width.
        // The only flush point for the block under construction.
        if let Some(header) = row.children.iter().find(|c| {
            matches!(c.kind, NodeKind::TableCell { header: true, colspan, .. }
                if colspan > 1 && colspan == width)
        }) {
            if !block.tenses.is_empty() {
                out.push(block);
            }
            block = ConjugationBlock {
                name: header.text_content().trim().to_string(),
                tenses: Vec::new(),
            };
            continue;
        }

        // Rules 2-5: classify by the rail-header cell's role label.
        let rail = row.children.iter().find_map(|c| {
            if !matches!(c.kind, NodeKind::TableCell { header: true, .. }) {
                return None;
            }
            let role = *ROW_ROLES.get(c.label.as_deref()?)?;
            Some((c, role))
        });
        let Some((rail_cell, role)) = rail else {
            continue;
        };

        let data = data_cells(row);

        match role {
            RowRole::TenseRail => {
                // A merged multi-row header is a continuation carry-over.
                if cell_rowspan(rail_cell) > 1 {
                    continue;
                }
                let name = rail_cell.text_content().trim().to_string();
                if data.len() < 6 {
                    log::warn!("tense row '{}' has {} data cells, need 6", name, data.len());
                    continue;
                }
                block.tenses.push(decode_tense(name, &data, &FINITE_PERSONS, markers));
            },
            RowRole::ImperativeRail => {
                if cell_colspan(rail_cell) > 1 {
                    continue;
                }
                let name = rail_cell.text_content().trim().to_string();
                if data.len() < 5 {
                    log::warn!(
                        "imperative row '{}' has {} data cells, need 5",
                        name,
                        data.len()
                    );
                    continue;
                }
                block
                    .tenses
                    .push(decode_tense(name, &data, &IMPERATIVE_PERSONS, markers));
            },
            RowRole::NonFinite => {
                if cell_colspan(rail_cell) > 1 {
                    continue;
                }
                let name = rail_cell.text_content().trim().to_string();
                let forms = match data.len() {
                    0 => continue,
                    // A single cell is an invariant form: it covers both
                    // singular and plural.
                    1 => {
                        let form = resolve_variant(data[0], markers);
                        NONFINITE_PERSONS
                            .iter()
                            .map(|&person| ConjugationForm::new(person, form.clone()))
                            .collect()
                    },
                    _ => NONFINITE_PERSONS
                        .iter()
                        .zip(&data)
                        .map(|(&person, &cell)| {
                            ConjugationForm::new(person, resolve_variant(cell, markers))
                        })
                        .collect(),
                };
                block.tenses.push(ConjugationTense { name, forms });
            },
        }
    }

    // No flush at end of table: a block still under construction here is
    // discarded.
    if !block.tenses.is_empty() {
        log::trace!("dropping unterminated block '{}'", block.name);
    }
}

/// Data cells of a row: non-header cells containing at least one inline
/// span. Placeholder cells without spans are not counted.
fn data_cells(row: &Node) -> Vec<&Node> {
    row.children
        .iter()
        .filter(|c| {
            matches!(c.kind, NodeKind::TableCell { header: false, .. })
                && c.any_descendant(&|n| n.kind == NodeKind::Span { marker: false })
        })
        .collect()
}

fn decode_tense(
    name: String,
    data: &[&Node],
    persons: &[(&str, usize)],
    markers: &HashSet<String>,
) -> ConjugationTense {
    let forms = persons
        .iter()
        .map(|&(person, idx)| ConjugationForm::new(person, resolve_variant(data[idx], markers)))
        .collect();
    ConjugationTense { name, forms }
}

fn cell_colspan(cell: &Node) -> u32 {
    match cell.kind {
        NodeKind::TableCell { colspan, .. } => colspan,
        _ => 1,
    }
}

fn cell_rowspan(cell: &Node) -> u32 {
    match cell.kind {
        NodeKind::TableCell { rowspan, .. } => rowspan,
        _ => 1,
    }
}

/// Resolve a cell that may hold several dialect variants.
///
/// A cell without the list separator is returned trimmed, unchanged. With
/// one, the span immediately preceding a marker glyph from the dialect set
/// wins; if no span matches, the full cell text is returned as-is. This path
/// degrades, it never fails.
fn resolve_variant(cell: &Node, markers: &HashSet<String>) -> String {
    let full = cell.text_content().trim().to_string();
    if !full.contains(VARIANT_SEPARATOR) {
        return full;
    }

    match find_marked_variant(&cell.children, markers) {
        Some(form) => form,
        None => full,
    }
}

/// Find a plain span immediately followed by a marker from the dialect set.
/// The marker's preceding sibling is checked directly, and one wrapper level
/// down when the sibling is not itself a span.
fn find_marked_variant(nodes: &[Node], markers: &HashSet<String>) -> Option<String> {
    for (i, node) in nodes.iter().enumerate() {
        if is_marker(node) {
            if i == 0 || !markers.contains(node.text_content().trim()) {
                continue;
            }
            let prev = &nodes[i - 1];
            if prev.kind == (NodeKind::Span { marker: false }) {
                let text = prev.text_content().trim().to_string();
                if !text.is_empty() {
                    return Some(text);
                }
            }
            let wrapped = prev
                .children
                .iter()
                .find(|c| c.kind == NodeKind::Span { marker: false });
            if let Some(span) = wrapped {
                let text = span.text_content().trim().to_string();
                if !text.is_empty() {
                    return Some(text);
                }
            }
        } else if let Some(found) = find_marked_variant(&node.children, markers) {
            return Some(found);
        }
    }
    None
}
