//! Feed-cycle detection.
//!
//! Works on the dense adjacency lists the topology builds, so it runs before
//! a `Topology` exists and needs nothing but indices.

/// DFS colouring for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Find one directed cycle, if any.
///
/// Iterative depth-first search with a recursion stack held on the heap, so
/// deep feed chains cannot overflow the thread stack. Roots are tried in
/// index order and children in adjacency order, which makes the reported
/// cycle deterministic for a given input.
///
/// Returns the cycle members in feed order, starting with the node the back
/// edge points to. The last member feeds the first.
pub(crate) fn find_cycle(outgoing: &[Vec<usize>]) -> Option<Vec<usize>> {
    let mut marks = vec![Mark::Unvisited; outgoing.len()];
    // (node, index of the next child to explore)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..outgoing.len() {
        if marks[root] != Mark::Unvisited {
            continue;
        }

        marks[root] = Mark::OnPath;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (node, cursor) = *frame;

            let Some(&next) = outgoing[node].get(cursor) else {
                marks[node] = Mark::Done;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match marks[next] {
                Mark::Unvisited => {
                    marks[next] = Mark::OnPath;
                    stack.push((next, 0));
                }
                Mark::OnPath => {
                    // Back edge: everything on the stack from `next` upward is the cycle
                    let start = stack.iter().position(|&(n, _)| n == next).unwrap_or(0);
                    return Some(stack[start..].iter().map(|&(n, _)| n).collect());
                }
                Mark::Done => {}
            }
        }
    }

    None
}
