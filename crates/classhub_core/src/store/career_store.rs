//! Career entity store: catalog, learning resources and curated paths.
//!
//! # Invariants
//! - Path entries reference catalog careers weakly; removing a career leaves
//!   paths untouched and resolution simply skips the dangling id.

use crate::model::career::{
    Career, CareerPatch, CareerPath, CareerResource, NewCareer, NewCareerPath, NewCareerResource,
};
use crate::model::RecordId;
use crate::storage::BackingStore;
use crate::store::{now_millis, Collection, StoreResult};
use crate::view;
use std::rc::Rc;

const CAREERS_KEY: &str = "careers";
const RESOURCES_KEY: &str = "careerResources";
const PATHS_KEY: &str = "careerPaths";

/// Number of resources surfaced on the careers landing view.
const LATEST_RESOURCES_COUNT: usize = 3;

/// Store for the career catalog family.
pub struct CareerStore<S: BackingStore> {
    backing: Rc<S>,
    careers: Collection<Career>,
    resources: Collection<CareerResource>,
    paths: Collection<CareerPath>,
}

impl<S: BackingStore> CareerStore<S> {
    pub fn open(backing: Rc<S>) -> StoreResult<Self> {
        let careers = Collection::hydrate(CAREERS_KEY, backing.as_ref(), seed_careers())?;
        let resources = Collection::hydrate(RESOURCES_KEY, backing.as_ref(), seed_resources())?;
        let paths = Collection::hydrate(PATHS_KEY, backing.as_ref(), seed_paths())?;
        Ok(Self {
            backing,
            careers,
            resources,
            paths,
        })
    }

    pub fn add_career(&mut self, new: NewCareer) -> StoreResult<RecordId> {
        self.careers.add(self.backing.as_ref(), |id| Career {
            id,
            title: new.title,
            field: new.field,
            description: new.description,
            skills: new.skills,
            education: new.education,
        })
    }

    pub fn update_career(&mut self, id: RecordId, patch: CareerPatch) -> StoreResult<bool> {
        self.careers
            .update(self.backing.as_ref(), id, |career| career.apply(patch))
    }

    pub fn remove_career(&mut self, id: RecordId) -> StoreResult<bool> {
        self.careers.remove(self.backing.as_ref(), id)
    }

    pub fn careers(&self) -> Vec<Career> {
        self.careers.list()
    }

    pub fn add_resource(&mut self, new: NewCareerResource) -> StoreResult<RecordId> {
        self.resources
            .add(self.backing.as_ref(), |id| CareerResource {
                id,
                title: new.title,
                url: new.url,
                category: new.category,
                created_at: now_millis(),
            })
    }

    pub fn remove_resource(&mut self, id: RecordId) -> StoreResult<bool> {
        self.resources.remove(self.backing.as_ref(), id)
    }

    pub fn resources(&self) -> Vec<CareerResource> {
        self.resources.list()
    }

    pub fn add_path(&mut self, new: NewCareerPath) -> StoreResult<RecordId> {
        self.paths.add(self.backing.as_ref(), |id| CareerPath {
            id,
            name: new.name,
            description: new.description,
            career_ids: new.career_ids,
        })
    }

    pub fn remove_path(&mut self, id: RecordId) -> StoreResult<bool> {
        self.paths.remove(self.backing.as_ref(), id)
    }

    pub fn paths(&self) -> Vec<CareerPath> {
        self.paths.list()
    }

    /// Catalog entries whose skill tags loosely match the student's interest.
    pub fn recommendations(&self, interest: &str) -> Vec<Career> {
        view::recommend_careers(self.careers.records(), interest)
    }

    /// The three most recently added resources; ties keep insertion order.
    pub fn latest_resources(&self) -> Vec<CareerResource> {
        view::top_n_recent(
            self.resources.records(),
            LATEST_RESOURCES_COUNT,
            |resource| resource.created_at,
        )
    }

    /// Careers of one path in path order, dangling references skipped.
    pub fn path_careers(&self, path_id: RecordId) -> Vec<Career> {
        match self.paths.get(path_id) {
            Some(path) => view::resolve_path_careers(path, self.careers.records()),
            None => Vec::new(),
        }
    }
}

fn seed_careers() -> Vec<Career> {
    vec![
        Career {
            id: 1,
            title: "Network Engineer".to_string(),
            field: "Infrastruktur IT".to_string(),
            description: "Merancang dan memelihara jaringan komputer perusahaan.".to_string(),
            skills: vec![
                "Networking".to_string(),
                "Cisco".to_string(),
                "Linux".to_string(),
            ],
            education: "D3/S1 Teknik Informatika".to_string(),
        },
        Career {
            id: 2,
            title: "Cybersecurity Analyst".to_string(),
            field: "Keamanan Informasi".to_string(),
            description: "Memantau dan menanggapi ancaman keamanan sistem.".to_string(),
            skills: vec![
                "Cybersecurity Analyst".to_string(),
                "Security Operations".to_string(),
                "Linux".to_string(),
            ],
            education: "S1 Sistem Informasi".to_string(),
        },
        Career {
            id: 3,
            title: "UI/UX Designer".to_string(),
            field: "Desain Produk".to_string(),
            description: "Merancang antarmuka dan pengalaman pengguna aplikasi.".to_string(),
            skills: vec!["Desain Grafis".to_string(), "Figma".to_string()],
            education: "S1 Desain Komunikasi Visual".to_string(),
        },
    ]
}

fn seed_resources() -> Vec<CareerResource> {
    vec![
        CareerResource {
            id: 1,
            title: "Panduan Sertifikasi Jaringan".to_string(),
            url: "https://example.com/panduan-jaringan".to_string(),
            category: "Artikel".to_string(),
            created_at: 1_733_011_200_000,
        },
        CareerResource {
            id: 2,
            title: "Webinar Karier Keamanan Siber".to_string(),
            url: "https://example.com/webinar-keamanan".to_string(),
            category: "Video".to_string(),
            created_at: 1_735_689_600_000,
        },
        CareerResource {
            id: 3,
            title: "Kursus Dasar Desain Antarmuka".to_string(),
            url: "https://example.com/kursus-desain".to_string(),
            category: "Kursus".to_string(),
            created_at: 1_738_368_000_000,
        },
    ]
}

fn seed_paths() -> Vec<CareerPath> {
    vec![CareerPath {
        id: 1,
        name: "Jalur Teknologi Informasi".to_string(),
        description: "Dari teknisi jaringan menuju spesialis keamanan.".to_string(),
        career_ids: vec![1, 2],
    }]
}
