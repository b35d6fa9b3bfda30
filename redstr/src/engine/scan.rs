//! The two evaluation strategies.

use std::{borrow::Cow, collections::BTreeMap, ops::Range};

use super::{result::RedactionResult, rule::RedactionRule};

#[derive(Clone, Copy, Debug)]
struct Candidate {
    start: usize,
    end: usize,
    rule: usize,
}

/// Every rule scans the original text; spans are chosen earliest start first,
/// then longest, then by rule order. Text left uncovered is scanned again
/// until no rule finds anything new there.
pub(super) fn merged(rules: &[RedactionRule], input: &str) -> RedactionResult {
    let mut chosen: Vec<Candidate> = Vec::new();
    loop {
        let covered: Vec<Range<usize>> = chosen.iter().map(|c| c.start..c.end).collect();
        let covered = covered.as_slice();
        let mut candidates: Vec<Candidate> = rules
            .iter()
            .enumerate()
            .flat_map(move |(rule, redaction)| {
                gap_spans(redaction, input, covered)
                    .map(move |(start, end)| Candidate { start, end, rule })
            })
            .collect();
        if candidates.is_empty() {
            break;
        }

        candidates.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then_with(|| b.end.cmp(&a.end))
                .then_with(|| a.rule.cmp(&b.rule))
        });
        let mut cursor = 0;
        for candidate in candidates {
            if candidate.start < cursor {
                continue;
            }
            cursor = candidate.end;
            chosen.push(candidate);
        }
        chosen.sort_by_key(|candidate| candidate.start);
    }
    if chosen.is_empty() {
        return RedactionResult::unchanged(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut counts = BTreeMap::new();
    let mut cursor = 0;
    for candidate in chosen {
        let rule = &rules[candidate.rule];
        out.push_str(&input[cursor..candidate.start]);
        rule.replacement()
            .write_to(&input[candidate.start..candidate.end], &mut out);
        *counts.entry(rule.name().to_string()).or_insert(0) += 1;
        cursor = candidate.end;
    }
    out.push_str(&input[cursor..]);

    RedactionResult::new(out, counts)
}

/// Rules run in order over the cumulative output. Replaced spans are frozen:
/// later rules only see the text between them.
pub(super) fn sequential(rules: &[RedactionRule], input: &str) -> RedactionResult {
    let mut text = Cow::Borrowed(input);
    let mut frozen: Vec<Range<usize>> = Vec::new();
    let mut counts = BTreeMap::new();

    for rule in rules {
        let hits: Vec<(usize, usize)> = gap_spans(rule, &text, &frozen).collect();
        if hits.is_empty() {
            continue;
        }

        let mut out = String::with_capacity(text.len());
        let mut next_frozen = Vec::with_capacity(frozen.len() + hits.len());
        let mut earlier = frozen.iter().peekable();
        let mut cursor = 0;
        for &(start, end) in &hits {
            // Carry forward earlier replacements that sit before this hit.
            while let Some(range) = earlier.next_if(|range| range.start < start) {
                let shifted = out.len() + (range.start - cursor);
                next_frozen.push(shifted..shifted + range.len());
            }
            out.push_str(&text[cursor..start]);
            let replaced_at = out.len();
            rule.replacement().write_to(&text[start..end], &mut out);
            next_frozen.push(replaced_at..out.len());
            cursor = end;
        }
        for range in earlier {
            let shifted = out.len() + (range.start - cursor);
            next_frozen.push(shifted..shifted + range.len());
        }
        out.push_str(&text[cursor..]);

        counts.insert(rule.name().to_string(), hits.len());
        text = Cow::Owned(out);
        frozen = next_frozen;
    }

    RedactionResult::new(text.into_owned(), counts)
}

/// Spans of `rule` found in the text between `covered` ranges.
///
/// Each gap is matched on its own, so a span never crosses or hides behind a
/// covered range. Gap edges behave like the start and end of the text for
/// anchors and word boundaries.
fn gap_spans<'a>(
    rule: &'a RedactionRule,
    text: &'a str,
    covered: &'a [Range<usize>],
) -> impl Iterator<Item = (usize, usize)> + 'a {
    gaps(covered, text.len()).flat_map(move |gap| {
        let offset = gap.start;
        rule.pattern()
            .spans(&text[gap])
            .map(move |(start, end)| (offset + start, offset + end))
    })
}

/// The non-empty ranges of `0..len` outside `covered`, which must be sorted
/// and disjoint.
fn gaps(covered: &[Range<usize>], len: usize) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut cursor = 0;
    covered
        .iter()
        .cloned()
        .chain(std::iter::once(len..len))
        .filter_map(move |range| {
            let gap = cursor..range.start;
            cursor = range.end;
            (!gap.is_empty()).then_some(gap)
        })
}
