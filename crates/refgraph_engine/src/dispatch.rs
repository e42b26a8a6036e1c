//! Typed call interface for embedding shells.
//!
//! A shell turns its commands into [`Request`]s and hands them to
//! [`Engine::execute`]; every request produces a [`Response`]. Missing or
//! duplicate records show up inside the response (`false`, `None`, empty
//! lists). The only fault is asking for an operation by a name the engine
//! does not know, which [`Operation::from_str`] reports as
//! [`ErrorKind::NotImplemented`](refgraph_foundation::ErrorKind::NotImplemented).

use std::fmt;
use std::str::FromStr;

use refgraph_foundation::{AffiliationId, Coord, Error, Name, PublicationId, Result, Year};
use refgraph_storage::{Catalog, StoreConfig};

use crate::query::Query;

/// Every operation the engine answers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Number of affiliations.
    AffiliationCount,
    /// Drop every record.
    ClearAll,
    /// Every affiliation id, unordered.
    AllAffiliations,
    /// Insert an affiliation.
    AddAffiliation,
    /// Name of one affiliation.
    AffiliationName,
    /// Coordinate of one affiliation.
    AffiliationCoord,
    /// Affiliations ordered by name.
    AffiliationsAlphabetically,
    /// Affiliations ordered by distance from the origin.
    AffiliationsDistanceIncreasing,
    /// Affiliation located at a coordinate.
    FindAffiliationWithCoord,
    /// Move an affiliation.
    ChangeAffiliationCoord,
    /// Insert a publication.
    AddPublication,
    /// Every publication id, unordered.
    AllPublications,
    /// Name of one publication.
    PublicationName,
    /// Year of one publication.
    PublicationYear,
    /// Affiliations listed on a publication.
    PublicationAffiliations,
    /// Link a child publication to its parent.
    AddReference,
    /// Publications a publication references directly.
    DirectReferences,
    /// Attach an affiliation to a publication.
    AddAffiliationToPublication,
    /// Publications citing an affiliation.
    PublicationsOf,
    /// Parent of a publication.
    Parent,
    /// An affiliation's publications from a given year on.
    PublicationsAfter,
    /// Publications that transitively reference a publication.
    ReferencedByChain,
    /// Publications a publication transitively references.
    AllReferences,
    /// Affiliations nearest to a coordinate.
    AffiliationsClosestTo,
    /// Remove an affiliation and detach it everywhere.
    RemoveAffiliation,
    /// Deepest common ancestor of two publications.
    ClosestCommonParent,
    /// Remove a publication and its edges.
    RemovePublication,
}

impl Operation {
    /// All operations, in the order a shell would list them.
    pub const ALL: [Operation; 27] = [
        Operation::AffiliationCount,
        Operation::ClearAll,
        Operation::AllAffiliations,
        Operation::AddAffiliation,
        Operation::AffiliationName,
        Operation::AffiliationCoord,
        Operation::AffiliationsAlphabetically,
        Operation::AffiliationsDistanceIncreasing,
        Operation::FindAffiliationWithCoord,
        Operation::ChangeAffiliationCoord,
        Operation::AddPublication,
        Operation::AllPublications,
        Operation::PublicationName,
        Operation::PublicationYear,
        Operation::PublicationAffiliations,
        Operation::AddReference,
        Operation::DirectReferences,
        Operation::AddAffiliationToPublication,
        Operation::PublicationsOf,
        Operation::Parent,
        Operation::PublicationsAfter,
        Operation::ReferencedByChain,
        Operation::AllReferences,
        Operation::AffiliationsClosestTo,
        Operation::RemoveAffiliation,
        Operation::ClosestCommonParent,
        Operation::RemovePublication,
    ];

    /// The command name a shell uses for this operation.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AffiliationCount => "get_affiliation_count",
            Self::ClearAll => "clear_all",
            Self::AllAffiliations => "get_all_affiliations",
            Self::AddAffiliation => "add_affiliation",
            Self::AffiliationName => "get_affiliation_name",
            Self::AffiliationCoord => "get_affiliation_coord",
            Self::AffiliationsAlphabetically => "get_affiliations_alphabetically",
            Self::AffiliationsDistanceIncreasing => "get_affiliations_distance_increasing",
            Self::FindAffiliationWithCoord => "find_affiliation_with_coord",
            Self::ChangeAffiliationCoord => "change_affiliation_coord",
            Self::AddPublication => "add_publication",
            Self::AllPublications => "all_publications",
            Self::PublicationName => "get_publication_name",
            Self::PublicationYear => "get_publication_year",
            Self::PublicationAffiliations => "get_affiliations",
            Self::AddReference => "add_reference",
            Self::DirectReferences => "get_direct_references",
            Self::AddAffiliationToPublication => "add_affiliation_to_publication",
            Self::PublicationsOf => "get_publications",
            Self::Parent => "get_parent",
            Self::PublicationsAfter => "get_publications_after",
            Self::ReferencedByChain => "get_referenced_by_chain",
            Self::AllReferences => "get_all_references",
            Self::AffiliationsClosestTo => "get_affiliations_closest_to",
            Self::RemoveAffiliation => "remove_affiliation",
            Self::ClosestCommonParent => "get_closest_common_parent",
            Self::RemovePublication => "remove_publication",
        }
    }

    /// Returns true if the operation can change the catalog.
    #[must_use]
    pub fn is_mutation(self) -> bool {
        matches!(
            self,
            Self::ClearAll
                | Self::AddAffiliation
                | Self::ChangeAffiliationCoord
                | Self::AddPublication
                | Self::AddReference
                | Self::AddAffiliationToPublication
                | Self::RemoveAffiliation
                | Self::RemovePublication
        )
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name() == name)
            .ok_or_else(|| Error::not_implemented(name).with_context("command lookup"))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single call into the engine, with typed arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    /// Number of affiliations.
    AffiliationCount,
    /// Drop every record.
    ClearAll,
    /// Every affiliation id, unordered.
    AllAffiliations,
    /// Insert an affiliation.
    AddAffiliation {
        /// Record key.
        id: AffiliationId,
        /// Display name.
        name: Name,
        /// Location.
        coord: Coord,
    },
    /// Name of one affiliation.
    AffiliationName(AffiliationId),
    /// Coordinate of one affiliation.
    AffiliationCoord(AffiliationId),
    /// Affiliations ordered by name.
    AffiliationsAlphabetically,
    /// Affiliations ordered by distance from the origin.
    AffiliationsDistanceIncreasing,
    /// Affiliation located at a coordinate.
    FindAffiliationWithCoord(Coord),
    /// Move an affiliation.
    ChangeAffiliationCoord {
        /// Record key.
        id: AffiliationId,
        /// Location.
        coord: Coord,
    },
    /// Insert a publication.
    AddPublication {
        /// Record key.
        id: PublicationId,
        /// Display name.
        name: Name,
        /// Publication year.
        year: Year,
        /// Affiliations to list; unknown ids are dropped.
        affiliations: Vec<AffiliationId>,
    },
    /// Every publication id, unordered.
    AllPublications,
    /// Name of one publication.
    PublicationName(PublicationId),
    /// Year of one publication.
    PublicationYear(PublicationId),
    /// Affiliations listed on a publication.
    PublicationAffiliations(PublicationId),
    /// Link a child publication to its parent.
    AddReference {
        /// Publication placed under `parent`.
        child: PublicationId,
        /// Publication that gains `child` as a direct reference.
        parent: PublicationId,
    },
    /// Publications a publication references directly.
    DirectReferences(PublicationId),
    /// Attach an affiliation to a publication.
    AddAffiliationToPublication {
        /// Affiliation key.
        affiliation: AffiliationId,
        /// Publication key.
        publication: PublicationId,
    },
    /// Publications citing an affiliation.
    PublicationsOf(AffiliationId),
    /// Parent of a publication.
    Parent(PublicationId),
    /// An affiliation's publications from a given year on.
    PublicationsAfter {
        /// Affiliation key.
        affiliation: AffiliationId,
        /// Earliest year included.
        year: Year,
    },
    /// Publications that transitively reference a publication.
    ReferencedByChain(PublicationId),
    /// Publications a publication transitively references.
    AllReferences(PublicationId),
    /// Affiliations nearest to a coordinate.
    AffiliationsClosestTo(Coord),
    /// Remove an affiliation and detach it everywhere.
    RemoveAffiliation(AffiliationId),
    /// Deepest common ancestor of two publications.
    ClosestCommonParent(PublicationId, PublicationId),
    /// Remove a publication and its edges.
    RemovePublication(PublicationId),
}

impl Request {
    /// The operation this request invokes.
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Self::AffiliationCount => Operation::AffiliationCount,
            Self::ClearAll => Operation::ClearAll,
            Self::AllAffiliations => Operation::AllAffiliations,
            Self::AddAffiliation { .. } => Operation::AddAffiliation,
            Self::AffiliationName(_) => Operation::AffiliationName,
            Self::AffiliationCoord(_) => Operation::AffiliationCoord,
            Self::AffiliationsAlphabetically => Operation::AffiliationsAlphabetically,
            Self::AffiliationsDistanceIncreasing => Operation::AffiliationsDistanceIncreasing,
            Self::FindAffiliationWithCoord(_) => Operation::FindAffiliationWithCoord,
            Self::ChangeAffiliationCoord { .. } => Operation::ChangeAffiliationCoord,
            Self::AddPublication { .. } => Operation::AddPublication,
            Self::AllPublications => Operation::AllPublications,
            Self::PublicationName(_) => Operation::PublicationName,
            Self::PublicationYear(_) => Operation::PublicationYear,
            Self::PublicationAffiliations(_) => Operation::PublicationAffiliations,
            Self::AddReference { .. } => Operation::AddReference,
            Self::DirectReferences(_) => Operation::DirectReferences,
            Self::AddAffiliationToPublication { .. } => Operation::AddAffiliationToPublication,
            Self::PublicationsOf(_) => Operation::PublicationsOf,
            Self::Parent(_) => Operation::Parent,
            Self::PublicationsAfter { .. } => Operation::PublicationsAfter,
            Self::ReferencedByChain(_) => Operation::ReferencedByChain,
            Self::AllReferences(_) => Operation::AllReferences,
            Self::AffiliationsClosestTo(_) => Operation::AffiliationsClosestTo,
            Self::RemoveAffiliation(_) => Operation::RemoveAffiliation,
            Self::ClosestCommonParent(..) => Operation::ClosestCommonParent,
            Self::RemovePublication(_) => Operation::RemovePublication,
        }
    }
}

/// The answer to a [`Request`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// Nothing to report.
    Unit,
    /// Outcome of a mutation: true if it was applied.
    Bool(bool),
    /// A record count.
    Count(usize),
    /// Affiliation ids in the order the operation defines.
    Affiliations(Vec<AffiliationId>),
    /// Publication ids in the order the operation defines.
    Publications(Vec<PublicationId>),
    /// Publications citing an affiliation; `None` if the affiliation is
    /// unknown.
    Citing(Option<Vec<PublicationId>>),
    /// `(year, id)` pairs sorted by year then id.
    YearPublications(Vec<(Year, PublicationId)>),
    /// A single affiliation, if found.
    Affiliation(Option<AffiliationId>),
    /// A single publication, if found.
    Publication(Option<PublicationId>),
    /// A name, if the record exists.
    Name(Option<Name>),
    /// A year, if the publication exists.
    Year(Option<Year>),
    /// A coordinate, if the affiliation exists.
    Coord(Option<Coord>),
}

/// Owns a [`Catalog`] and answers [`Request`]s against it.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    catalog: Catalog,
}

impl Engine {
    /// Creates an engine over an empty catalog with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine over an empty catalog with the given configuration.
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            catalog: Catalog::with_config(config),
        }
    }

    /// Returns the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the catalog for direct mutation.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Returns a query executor over the current catalog.
    #[must_use]
    pub fn query(&self) -> Query<'_> {
        Query::new(&self.catalog)
    }

    /// Runs one request to completion.
    pub fn execute(&mut self, request: Request) -> Response {
        let operation = request.operation();
        let response = self.apply(request);
        if operation.is_mutation() {
            tracing::trace!(%operation, ?response, "executed mutation");
        }
        response
    }

    #[allow(clippy::too_many_lines)]
    fn apply(&mut self, request: Request) -> Response {
        let catalog = &mut self.catalog;
        match request {
            Request::AffiliationCount => Response::Count(catalog.affiliation_count()),
            Request::ClearAll => {
                catalog.clear_all();
                Response::Unit
            }
            Request::AllAffiliations => Response::Affiliations(catalog.all_affiliations()),
            Request::AddAffiliation { id, name, coord } => {
                Response::Bool(catalog.add_affiliation(id, name, coord))
            }
            Request::AffiliationName(id) => {
                Response::Name(catalog.affiliation_name(&id).map(str::to_string))
            }
            Request::AffiliationCoord(id) => Response::Coord(catalog.affiliation_coord(&id)),
            Request::AffiliationsAlphabetically => {
                Response::Affiliations(catalog.affiliations_alphabetically())
            }
            Request::AffiliationsDistanceIncreasing => {
                Response::Affiliations(catalog.affiliations_distance_increasing())
            }
            Request::FindAffiliationWithCoord(coord) => {
                Response::Affiliation(catalog.find_affiliation_with_coord(coord))
            }
            Request::ChangeAffiliationCoord { id, coord } => {
                Response::Bool(catalog.change_affiliation_coord(&id, coord))
            }
            Request::AddPublication {
                id,
                name,
                year,
                affiliations,
            } => Response::Bool(catalog.add_publication(id, name, year, &affiliations)),
            Request::AllPublications => Response::Publications(catalog.all_publications()),
            Request::PublicationName(id) => {
                Response::Name(catalog.publication_name(id).map(str::to_string))
            }
            Request::PublicationYear(id) => Response::Year(catalog.publication_year(id)),
            Request::PublicationAffiliations(id) => {
                Response::Affiliations(catalog.publication_affiliations(id))
            }
            Request::AddReference { child, parent } => {
                Response::Bool(catalog.add_reference(child, parent))
            }
            Request::DirectReferences(id) => Response::Publications(catalog.direct_references(id)),
            Request::AddAffiliationToPublication {
                affiliation,
                publication,
            } => Response::Bool(catalog.add_affiliation_to_publication(&affiliation, publication)),
            Request::PublicationsOf(affiliation) => {
                Response::Citing(catalog.publications_of(&affiliation))
            }
            Request::Parent(id) => Response::Publication(catalog.parent(id)),
            Request::PublicationsAfter { affiliation, year } => Response::YearPublications(
                Query::new(catalog).publications_after(&affiliation, year),
            ),
            Request::ReferencedByChain(id) => {
                Response::Publications(Query::new(catalog).referenced_by_chain(id))
            }
            Request::AllReferences(id) => {
                Response::Publications(Query::new(catalog).all_references(id))
            }
            Request::AffiliationsClosestTo(coord) => {
                Response::Affiliations(Query::new(catalog).closest_to(coord))
            }
            Request::RemoveAffiliation(id) => Response::Bool(catalog.remove_affiliation(&id)),
            Request::ClosestCommonParent(a, b) => {
                Response::Publication(Query::new(catalog).lowest_common_ancestor(a, b))
            }
            Request::RemovePublication(id) => Response::Bool(catalog.remove_publication(id)),
        }
    }
}
