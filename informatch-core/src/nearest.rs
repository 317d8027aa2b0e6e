//! Find the closest person sharing a given interest.

use log::debug;

use crate::{
    PersonId, PersonRecord, RankError, ScoreError, TraitSet, find_person, geodesic_distance_km,
};

/// The closest candidate holding an interest, with its distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestMatch<'a> {
    /// The matching person.
    pub candidate: &'a PersonRecord,
    /// Geodesic distance from the self-person in kilometres.
    pub distance_km: f64,
}

/// Return the geographically closest other person whose traits include
/// `interest`.
///
/// Returns `Ok(None)` when nobody else holds the interest. When several
/// candidates are equally close the earliest in `population` wins.
///
/// # Errors
/// Returns [`RankError::NotFound`] for an unknown `self_id`, and
/// [`RankError::Score`] when a candidate has no entry in `traits`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use informatch_core::{PersonRecord, extract_traits, find_nearest_with_interest};
///
/// let people = vec![
///     PersonRecord::new("U01", Coord { x: 0.0, y: 0.0 }).with_categories("Art", "Film"),
///     PersonRecord::new("U02", Coord { x: 2.0, y: 0.0 }).with_categories("Sport", "Tennis"),
///     PersonRecord::new("U03", Coord { x: 1.0, y: 0.0 }).with_categories("Sport", "Golf"),
/// ];
/// let traits = extract_traits(&people);
/// let nearest = find_nearest_with_interest(&"U01".into(), &people, "Sport", &traits)
///     .expect("U01 is present")
///     .expect("someone plays sport");
/// assert_eq!(nearest.candidate.id.as_str(), "U03");
/// ```
pub fn find_nearest_with_interest<'a>(
    self_id: &PersonId,
    population: &'a [PersonRecord],
    interest: &str,
    traits: &TraitSet,
) -> Result<Option<NearestMatch<'a>>, RankError> {
    let person = find_person(self_id, population)?;
    let mut nearest: Option<NearestMatch<'a>> = None;
    for candidate in population.iter().filter(|c| c.id != person.id) {
        let candidate_traits = traits
            .get(&candidate.id)
            .ok_or_else(|| ScoreError::MissingTraits {
                id: candidate.id.clone(),
            })?;
        if !candidate_traits.contains(interest) {
            continue;
        }
        let distance_km = geodesic_distance_km(person.location, candidate.location);
        if nearest.is_none_or(|best| distance_km < best.distance_km) {
            nearest = Some(NearestMatch {
                candidate,
                distance_km,
            });
        }
    }
    debug!(
        "Nearest person to {} with interest {interest:?}: {:?}",
        person.id,
        nearest.map(|found| found.candidate.id.as_str())
    );
    Ok(nearest)
}
