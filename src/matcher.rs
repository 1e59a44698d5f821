use crate::ast::{PatternNode, RepeatKind};

// Return all possible end positions after matching `node` at `pos`.
pub fn match_node(node: &PatternNode, input: &[char], pos: usize) -> Vec<usize> {
    match node {
        PatternNode::Literal(c) => step_if(input, pos, |ch| ch == *c),
        PatternNode::Dot => step_if(input, pos, |_| true),
        PatternNode::Digit => step_if(input, pos, |ch| ch.is_ascii_digit()),
        PatternNode::Word => step_if(input, pos, |ch| ch.is_alphanumeric() || ch == '_'),
        PatternNode::CharClass { items, negated } => step_if(input, pos, |ch| {
            items.iter().any(|item| item.contains(ch)) != *negated
        }),
        PatternNode::StartAnchor => {
            if pos == 0 {
                vec![pos]
            } else {
                vec![]
            }
        }
        PatternNode::EndAnchor => {
            if pos == input.len() {
                vec![pos]
            } else {
                vec![]
            }
        }
        PatternNode::Group(inner) => match_node(inner, input, pos),
        PatternNode::Seq(nodes) => {
            let mut positions = vec![pos];
            for n in nodes {
                let mut next = Vec::new();
                for p in positions {
                    next.extend(match_node(n, input, p));
                }
                if next.is_empty() {
                    return vec![];
                }
                next.sort_unstable();
                next.dedup();
                positions = next;
            }
            positions
        }
        PatternNode::Repeat { node: inner, kind } => match kind {
            RepeatKind::ZeroOrOne => {
                let mut positions = vec![pos];
                positions.extend(match_node(inner, input, pos));
                positions.sort_unstable();
                positions.dedup();
                positions
            }
            RepeatKind::OneOrMore => {
                // Expand the frontier one repetition at a time. Revisiting a
                // position is dropped so a body that can match zero characters
                // cannot loop forever.
                let mut reached = Vec::new();
                let mut frontier = match_node(inner, input, pos);
                while !frontier.is_empty() {
                    frontier.retain(|p| !reached.contains(p));
                    reached.extend_from_slice(&frontier);
                    let mut next = Vec::new();
                    for p in &frontier {
                        next.extend(match_node(inner, input, *p));
                    }
                    next.sort_unstable();
                    next.dedup();
                    frontier = next;
                }
                reached.sort_unstable();
                reached.dedup();
                reached
            }
        },
    }
}

// Advance past one character when it satisfies `pred`.
fn step_if(input: &[char], pos: usize, pred: impl Fn(char) -> bool) -> Vec<usize> {
    match input.get(pos) {
        Some(&ch) if pred(ch) => vec![pos + 1],
        _ => vec![],
    }
}
