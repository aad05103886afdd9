//! Default title generation
//!
//! New tabs and groups get the first title in the "Shell", "Shell No. 2",
//! "Shell No. 3" (resp. "Group", "Group #2") sequence that collides with no
//! title currently in use anywhere in the collection.

pub(crate) fn tab_title(ordinal: usize) -> String {
    if ordinal == 0 {
        "Shell".to_string()
    } else {
        format!("Shell No. {}", ordinal + 1)
    }
}

pub(crate) fn group_title(ordinal: usize) -> String {
    if ordinal == 0 {
        "Group".to_string()
    } else {
        format!("Group #{}", ordinal + 1)
    }
}

pub(crate) fn first_free<M, T>(make: M, is_taken: T) -> String
where
    M: Fn(usize) -> String,
    T: Fn(&str) -> bool,
{
    let mut ordinal = 0;
    let mut title = make(ordinal);

    while is_taken(&title) {
        ordinal += 1;
        title = make(ordinal);
    }

    title
}
