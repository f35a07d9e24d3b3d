//! Comment thread assembly and author badge derivation.
//!
//! Comments are stored flat with a `parent_comment_id` pointer and read back
//! in `created_at` order. [`build_comment_tree`] turns that flat list into a
//! nested thread in O(n) without recursing into the database, and the badge
//! helpers derive the initials and avatar color shown next to each comment.

use std::collections::HashMap;

use folio_postgres::model::BlogComment;
use folio_postgres::types::AvatarColor;
use rand::Rng;
use uuid::Uuid;

/// A comment together with its direct replies, ordered oldest-first.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentNode {
    /// The comment itself.
    pub comment: BlogComment,
    /// Direct replies, in the same relative order as the input slice.
    pub replies: Vec<CommentNode>,
}

/// Builds a nested comment thread from a flat, `created_at`-ordered list.
///
/// Two passes over the input: the first indexes every comment by id and
/// records each comment either under its parent or as a root, the second
/// assembles the nodes. Sibling order is the input order, so callers get
/// oldest-first threads for free from the repository's `ORDER BY created_at`.
///
/// A comment whose parent is not present in the input (e.g. the parent was
/// filtered out by moderation, or deleted concurrently) is demoted to a root
/// rather than dropped, so no submitted comment silently disappears from the
/// thread.
pub fn build_comment_tree(comments: Vec<BlogComment>) -> Vec<CommentNode> {
    let index: HashMap<Uuid, usize> = comments
        .iter()
        .enumerate()
        .map(|(position, comment)| (comment.id, position))
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); comments.len()];
    let mut roots: Vec<usize> = Vec::new();

    for (position, comment) in comments.iter().enumerate() {
        let parent_position = comment
            .parent_comment_id
            .filter(|parent_id| *parent_id != comment.id)
            .and_then(|parent_id| index.get(&parent_id).copied());

        match parent_position {
            Some(parent) => children[parent].push(position),
            None => roots.push(position),
        }
    }

    let mut slots: Vec<Option<BlogComment>> = comments.into_iter().map(Some).collect();

    roots
        .into_iter()
        .filter_map(|position| assemble(position, &mut slots, &children))
        .collect()
}

/// Moves a comment out of its slot and attaches its assembled subtree.
///
/// Each slot is taken exactly once; an already-empty slot means the comment
/// was consumed by another branch and is skipped.
fn assemble(
    position: usize,
    slots: &mut [Option<BlogComment>],
    children: &[Vec<usize>],
) -> Option<CommentNode> {
    let comment = slots[position].take()?;

    let replies = children[position]
        .iter()
        .filter_map(|&child| assemble(child, slots, children))
        .collect();

    Some(CommentNode { comment, replies })
}

/// Derives up-to-two uppercase initials from an author name.
///
/// Takes the first character of the first two whitespace-separated words;
/// a single word yields one initial. A name with no usable characters
/// falls back to `"??"` so the badge is never blank.
#[must_use]
pub fn derive_initials(author_name: &str) -> String {
    let mut words = author_name.split_whitespace();

    let first = words.next().and_then(|word| word.chars().next());
    let second = words.next().and_then(|word| word.chars().next());

    match (first, second) {
        (Some(first), Some(second)) => [first, second]
            .iter()
            .flat_map(|c| c.to_uppercase())
            .collect(),
        (Some(first), None) => first.to_uppercase().collect(),
        _ => "??".to_owned(),
    }
}

/// Picks a random avatar color from the fixed palette.
///
/// The color is chosen once at creation time and stored with the comment,
/// so an author's badge never changes between page loads.
pub fn pick_avatar_color<R: Rng + ?Sized>(rng: &mut R) -> AvatarColor {
    let position = rng.random_range(0..AvatarColor::PALETTE.len());
    AvatarColor::PALETTE[position]
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use super::*;

    fn comment(id: Uuid, parent: Option<Uuid>, depth: i32) -> BlogComment {
        BlogComment {
            id,
            post_id: Uuid::nil(),
            parent_comment_id: parent,
            author_name: "Test Author".to_owned(),
            author_email: None,
            content: "content".to_owned(),
            author_initials: "TA".to_owned(),
            author_initials_color: AvatarColor::Blue,
            depth,
            likes_count: 0,
            is_approved: true,
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn empty_input_builds_empty_tree() {
        assert!(build_comment_tree(Vec::new()).is_empty());
    }

    #[test]
    fn roots_keep_input_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();

        let tree = build_comment_tree(vec![
            comment(a, None, 0),
            comment(b, None, 0),
            comment(c, None, 0),
        ]);

        let ids: Vec<Uuid> = tree.iter().map(|node| node.comment.id).collect();
        assert_eq!(ids, vec![a, b, c]);
        assert!(tree.iter().all(|node| node.replies.is_empty()));
    }

    #[test]
    fn replies_nest_under_their_parent() {
        let root = Uuid::new_v4();
        let reply = Uuid::new_v4();
        let nested = Uuid::new_v4();

        let tree = build_comment_tree(vec![
            comment(root, None, 0),
            comment(reply, Some(root), 1),
            comment(nested, Some(reply), 2),
        ]);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].comment.id, root);
        assert_eq!(tree[0].replies.len(), 1);
        assert_eq!(tree[0].replies[0].comment.id, reply);
        assert_eq!(tree[0].replies[0].replies[0].comment.id, nested);
    }

    #[test]
    fn siblings_keep_input_order() {
        let root = Uuid::new_v4();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let third = Uuid::new_v4();

        let tree = build_comment_tree(vec![
            comment(root, None, 0),
            comment(first, Some(root), 1),
            comment(second, Some(root), 1),
            comment(third, Some(root), 1),
        ]);

        let siblings: Vec<Uuid> = tree[0].replies.iter().map(|node| node.comment.id).collect();
        assert_eq!(siblings, vec![first, second, third]);
    }

    #[test]
    fn orphaned_reply_is_demoted_to_root() {
        let root = Uuid::new_v4();
        let orphan = Uuid::new_v4();
        let missing_parent = Uuid::new_v4();

        let tree = build_comment_tree(vec![
            comment(root, None, 0),
            comment(orphan, Some(missing_parent), 1),
        ]);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].comment.id, root);
        assert_eq!(tree[1].comment.id, orphan);
        assert!(tree[1].replies.is_empty());
    }

    #[test]
    fn self_referencing_comment_becomes_root() {
        let id = Uuid::new_v4();

        let tree = build_comment_tree(vec![comment(id, Some(id), 1)]);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].comment.id, id);
        assert!(tree[0].replies.is_empty());
    }

    #[test]
    fn tree_preserves_every_comment() {
        let root_a = Uuid::new_v4();
        let root_b = Uuid::new_v4();
        let reply_a = Uuid::new_v4();
        let reply_b = Uuid::new_v4();
        let orphan = Uuid::new_v4();

        let tree = build_comment_tree(vec![
            comment(root_a, None, 0),
            comment(reply_a, Some(root_a), 1),
            comment(root_b, None, 0),
            comment(reply_b, Some(root_a), 1),
            comment(orphan, Some(Uuid::new_v4()), 1),
        ]);

        fn count(nodes: &[CommentNode]) -> usize {
            nodes
                .iter()
                .map(|node| 1 + count(&node.replies))
                .sum()
        }

        assert_eq!(count(&tree), 5);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn initials_from_two_word_name() {
        assert_eq!(derive_initials("Jane Doe"), "JD");
    }

    #[test]
    fn initials_use_first_two_words() {
        assert_eq!(derive_initials("Jean Claude Van Damme"), "JC");
    }

    #[test]
    fn initials_from_single_word_name() {
        assert_eq!(derive_initials("Madonna"), "M");
    }

    #[test]
    fn initials_are_uppercased() {
        assert_eq!(derive_initials("jane doe"), "JD");
    }

    #[test]
    fn initials_fall_back_on_empty_name() {
        assert_eq!(derive_initials(""), "??");
        assert_eq!(derive_initials("   "), "??");
    }

    #[test]
    fn avatar_color_comes_from_palette() {
        let mut rng = rand::rng();
        for _ in 0..64 {
            let color = pick_avatar_color(&mut rng);
            assert!(AvatarColor::PALETTE.contains(&color));
        }
    }
}
