//! The SDM publication vocabulary.
//!
//! Every predicate the converter can emit is a variant of [`Predicate`]. The
//! set is closed: a key that is not listed here cannot be named by a mapping
//! table, so an unknown key fails when the table is built rather than while
//! rows are being loaded.
//!
//! **Namespace:** `http://www.gra.fo/schema/sdm/` (prefix `sdm`).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An IRI prefix used to mint identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    /// The prefix bound in serialized output (e.g., `"sdm"`).
    pub prefix: &'static str,
    /// The full namespace IRI (e.g., `"http://www.gra.fo/schema/sdm/"`).
    pub iri: &'static str,
}

/// The SDM schema namespace. All subjects, predicates, and IRI objects live here.
pub const SDM: Namespace = Namespace {
    prefix: "sdm",
    iri: "http://www.gra.fo/schema/sdm/",
};

/// XML Schema datatypes.
pub const XSD: Namespace = Namespace {
    prefix: "xsd",
    iri: "http://www.w3.org/2001/XMLSchema#",
};

/// RDF core vocabulary.
pub const RDF: Namespace = Namespace {
    prefix: "rdf",
    iri: "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
};

/// RDF Schema.
pub const RDFS: Namespace = Namespace {
    prefix: "rdfs",
    iri: "http://www.w3.org/2000/01/rdf-schema#",
};

/// OWL 2.
pub const OWL: Namespace = Namespace {
    prefix: "owl",
    iri: "http://www.w3.org/2002/07/owl#",
};

/// Well-known IRIs outside the SDM namespace.
pub mod iris {
    /// `xsd:string`
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `rdf:type`
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:Property`
    pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
    /// `owl:ObjectProperty`
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:DatatypeProperty`
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
}

impl Namespace {
    /// Builds an identifier in this namespace from a raw CSV cell value.
    ///
    /// The value is appended to the namespace IRI. Characters that may not
    /// appear in an IRI are percent-encoded, and so is `%` itself, so distinct
    /// cells never collide. Everything else is kept as is, so
    /// `SDM.mint("p1")` is exactly `http://www.gra.fo/schema/sdm/p1`.
    #[must_use]
    pub fn mint(&self, local: &str) -> String {
        let mut iri = String::with_capacity(self.iri.len() + local.len());
        iri.push_str(self.iri);
        for c in local.chars() {
            match c {
                '%' | ' ' | '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => {
                    push_percent_encoded(&mut iri, c);
                }
                c if c.is_control() => push_percent_encoded(&mut iri, c),
                c => iri.push(c),
            }
        }
        iri
    }

    /// Returns the local part of `iri` if it lies in this namespace.
    #[must_use]
    pub fn local<'a>(&self, iri: &'a str) -> Option<&'a str> {
        iri.strip_prefix(self.iri)
    }
}

fn push_percent_encoded(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    for byte in c.encode_utf8(&mut buf).bytes() {
        out.push_str(&format!("%{:02X}", byte));
    }
}

/// Whether a predicate relates two entities or an entity and a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// `owl:ObjectProperty`: the object is another SDM entity.
    Object,
    /// `owl:DatatypeProperty`: the object is an `xsd:string` literal.
    Datatype,
}

/// A predicate key was not found in the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown predicate key: {0:?}")]
pub struct UnknownPredicate(pub String);

macro_rules! predicates {
    ($( $(#[$doc:meta])* $variant:ident => $key:literal, $kind:ident; )*) => {
        /// A predicate of the SDM vocabulary.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Predicate {
            $( $(#[$doc])* $variant, )*
        }

        impl Predicate {
            /// Every predicate, in vocabulary order.
            pub const ALL: &'static [Predicate] = &[ $( Predicate::$variant, )* ];

            /// The short key used in mapping tables (e.g., `"writes"`).
            #[must_use]
            pub fn key(self) -> &'static str {
                match self {
                    $( Predicate::$variant => $key, )*
                }
            }

            /// The fully-qualified predicate IRI.
            #[must_use]
            pub fn iri(self) -> &'static str {
                match self {
                    $( Predicate::$variant => concat!("http://www.gra.fo/schema/sdm/", $key), )*
                }
            }

            /// Object or datatype property.
            #[must_use]
            pub fn kind(self) -> PropertyKind {
                match self {
                    $( Predicate::$variant => PropertyKind::$kind, )*
                }
            }

            /// Resolves a short key.
            ///
            /// # Errors
            ///
            /// Returns [`UnknownPredicate`] if `key` is not in the vocabulary.
            pub fn from_key(key: &str) -> Result<Self, UnknownPredicate> {
                match key {
                    $( $key => Ok(Predicate::$variant), )*
                    _ => Err(UnknownPredicate(key.to_owned())),
                }
            }

            /// Resolves a full IRI back to its predicate.
            #[must_use]
            pub fn from_iri(iri: &str) -> Option<Self> {
                SDM.local(iri).and_then(|key| Self::from_key(key).ok())
            }
        }
    };
}

predicates! {
    /// Review → paper.
    About => "about", Object;
    /// Paper → cited paper.
    Cites => "cites", Object;
    /// Author → paper, for the corresponding author only.
    CorrAuthor => "corr_author", Object;
    /// Venue → publication container.
    Holds => "holds", Object;
    /// Conference → edition.
    HoldsConf => "holds_conf", Object;
    /// Journal → volume.
    HoldsJour => "holds_jour", Object;
    /// Paper → venue.
    PublIn => "publ_in", Object;
    /// Edition → paper.
    PublInEdi => "publ_in_edi", Object;
    /// Volume → paper.
    PublInVol => "publ_in_vol", Object;
    /// Paper → keyword.
    RelatesTo => "relates_to", Object;
    /// Author → paper.
    Writes => "writes", Object;
    /// Reviewer → review.
    WritesR => "writes_r", Object;
    /// Paper abstract.
    Abstract => "abstract", Datatype;
    /// Author display name.
    AuthorName => "author_name", Datatype;
    /// Conference name.
    ConfName => "conf_name", Datatype;
    /// Review text.
    Content => "content", Datatype;
    /// Review decision.
    Decision => "decision", Datatype;
    /// Paper DOI.
    Doi => "doi", Datatype;
    /// Edition name.
    EdiName => "edi_name", Datatype;
    /// Edition number.
    EdiNum => "edi_num", Datatype;
    /// Edition year.
    EdiYear => "edi_year", Datatype;
    /// Journal name.
    JourName => "jour_name", Datatype;
    /// Keyword text.
    Keyword => "keyword", Datatype;
    /// Paper title.
    Title => "title", Datatype;
    /// Volume name.
    VolName => "vol_name", Datatype;
    /// Volume year.
    VolYear => "vol_year", Datatype;
    /// Reviewer display name.
    ReviewerName => "reviewer_name", Datatype;
    /// Community name.
    CommunityName => "community_name", Datatype;
    /// Journal → community.
    JourPertainsTo => "jour_pertains_to", Object;
    /// Conference → community.
    ConfPertainsTo => "conf_pertains_to", Object;
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", SDM.prefix, self.key())
    }
}

impl FromStr for Predicate {
    type Err = UnknownPredicate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Predicate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = <String as serde::Deserialize>::deserialize(deserializer)?;
        Predicate::from_key(&key).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Predicate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_has_thirty_predicates() {
        assert_eq!(Predicate::ALL.len(), 30);
    }

    #[test]
    fn keys_round_trip() {
        for &p in Predicate::ALL {
            assert_eq!(Predicate::from_key(p.key()), Ok(p));
            assert_eq!(Predicate::from_iri(p.iri()), Some(p));
        }
    }

    #[test]
    fn predicate_iris_live_in_sdm() {
        assert_eq!(Predicate::Writes.iri(), "http://www.gra.fo/schema/sdm/writes");
        assert_eq!(
            Predicate::CorrAuthor.iri(),
            "http://www.gra.fo/schema/sdm/corr_author"
        );
        for &p in Predicate::ALL {
            assert_eq!(SDM.local(p.iri()), Some(p.key()));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(
            "wrote".parse::<Predicate>(),
            Err(UnknownPredicate("wrote".to_owned()))
        );
    }

    #[test]
    fn mint_concatenates_plain_identifiers() {
        assert_eq!(SDM.mint("p1"), "http://www.gra.fo/schema/sdm/p1");
        assert_eq!(SDM.mint("10.1/x"), "http://www.gra.fo/schema/sdm/10.1/x");
        assert_eq!(SDM.mint(""), SDM.iri);
    }

    #[test]
    fn mint_percent_encodes_forbidden_characters() {
        assert_eq!(
            SDM.mint("Data Science"),
            "http://www.gra.fo/schema/sdm/Data%20Science"
        );
        assert_eq!(SDM.mint("a<b>"), "http://www.gra.fo/schema/sdm/a%3Cb%3E");
        assert_eq!(SDM.mint("é"), "http://www.gra.fo/schema/sdm/é");
        assert_eq!(SDM.mint("a%20b"), "http://www.gra.fo/schema/sdm/a%2520b");
        assert_ne!(SDM.mint("a%20b"), SDM.mint("a b"));
    }

    #[test]
    fn kinds_follow_the_schema() {
        assert_eq!(Predicate::Writes.kind(), PropertyKind::Object);
        assert_eq!(Predicate::Title.kind(), PropertyKind::Datatype);
        assert_eq!(Predicate::ConfPertainsTo.kind(), PropertyKind::Object);
    }
}
