use crate::models::CandidateLink;

/// Picks the link whose visible text is the given day name.
///
/// Text is compared after trimming and lowercasing, and must match exactly.
/// The first match in enumeration order wins. `None` means the page has no
/// link for that day.
pub fn select_link<'a, I>(links: I, day_name: &str) -> Option<&'a CandidateLink>
where
    I: IntoIterator<Item = &'a CandidateLink>,
{
    let target = day_name.trim().to_lowercase();
    links
        .into_iter()
        .find(|link| link.normalized_text() == target)
}
