//! Projects and publications shown by the content sections.
//!
//! [`Catalog`] is the read/write surface; [`MemCatalog`] keeps everything in
//! memory and can be seeded with sample data or loaded from a JSON file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors from catalog reads, writes, and loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: u32 },
    #[error("invalid {kind}: {reason}")]
    Invalid { kind: &'static str, reason: String },
    #[error("failed to read catalog '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planned => "Planned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Fields for a project that has no id yet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub metrics: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Partial update; `None` leaves a field unchanged.
#[allow(dead_code)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub status: Option<ProjectStatus>,
    pub metrics: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationKind {
    Conference,
    Journal,
}

impl PublicationKind {
    pub fn label(self) -> &'static str {
        match self {
            PublicationKind::Conference => "conference",
            PublicationKind::Journal => "journal",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationStatus {
    #[default]
    Published,
    Accepted,
    UnderReview,
}

impl PublicationStatus {
    pub fn label(self) -> &'static str {
        match self {
            PublicationStatus::Published => "published",
            PublicationStatus::Accepted => "accepted",
            PublicationStatus::UnderReview => "under_review",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: u32,
    pub title: String,
    pub authors: String,
    #[serde(rename = "type")]
    pub kind: PublicationKind,
    pub venue: String,
    pub year: i32,
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub status: PublicationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPublication {
    pub title: String,
    pub authors: String,
    #[serde(rename = "type")]
    pub kind: PublicationKind,
    pub venue: String,
    pub year: i32,
    #[serde(rename = "abstract", default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub status: PublicationStatus,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicationPatch {
    pub title: Option<String>,
    pub authors: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<PublicationKind>,
    pub venue: Option<String>,
    pub year: Option<i32>,
    #[serde(rename = "abstract")]
    pub summary: Option<String>,
    pub doi: Option<String>,
    pub pdf_url: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub status: Option<PublicationStatus>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub featured_only: bool,
}

/// Read/write access to projects and publications.
///
/// The TUI only renders the listings; lookups by id and writes are not
/// reached from it.
#[allow(dead_code)]
pub trait Catalog {
    /// Projects matching `filter`, featured first, then by id.
    fn projects(&self, filter: ProjectFilter) -> Vec<Project>;
    fn project(&self, id: u32) -> Result<Project, CatalogError>;
    fn create_project(&mut self, new: NewProject) -> Result<Project, CatalogError>;
    fn update_project(&mut self, id: u32, patch: ProjectPatch) -> Result<Project, CatalogError>;
    fn delete_project(&mut self, id: u32) -> Result<(), CatalogError>;

    /// Publications, optionally of one kind, newest year first.
    fn publications(&self, kind: Option<PublicationKind>) -> Vec<Publication>;
    fn publication(&self, id: u32) -> Result<Publication, CatalogError>;
    fn create_publication(&mut self, new: NewPublication) -> Result<Publication, CatalogError>;
    fn update_publication(
        &mut self,
        id: u32,
        patch: PublicationPatch,
    ) -> Result<Publication, CatalogError>;
    fn delete_publication(&mut self, id: u32) -> Result<(), CatalogError>;
}

/// On-disk layout of a catalog file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    publications: Vec<Publication>,
}

/// In-memory catalog. Ids are handed out sequentially and never reused.
#[derive(Debug, Clone)]
pub struct MemCatalog {
    projects: BTreeMap<u32, Project>,
    publications: BTreeMap<u32, Publication>,
    next_project_id: u32,
    next_publication_id: u32,
}

const PROJECT: &str = "project";
const PUBLICATION: &str = "publication";

impl MemCatalog {
    pub fn new() -> Self {
        Self {
            projects: BTreeMap::new(),
            publications: BTreeMap::new(),
            next_project_id: 1,
            next_publication_id: 1,
        }
    }

    /// Parse a catalog from JSON. Every record is validated and ids must be
    /// unique per resource.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut catalog = Self::new();

        for project in file.projects {
            validate_project(&project.name, &project.description)?;
            let id = project.id;
            if catalog.projects.insert(id, project).is_some() {
                return Err(invalid(PROJECT, format!("duplicate id {id}")));
            }
            catalog.next_project_id = catalog.next_project_id.max(id.saturating_add(1));
        }
        for publication in file.publications {
            validate_publication(
                &publication.title,
                &publication.authors,
                &publication.venue,
                publication.year,
            )?;
            let id = publication.id;
            if catalog.publications.insert(id, publication).is_some() {
                return Err(invalid(PUBLICATION, format!("duplicate id {id}")));
            }
            catalog.next_publication_id = catalog.next_publication_id.max(id.saturating_add(1));
        }

        tracing::info!(
            projects = catalog.projects.len(),
            publications = catalog.publications.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serialize in the same layout [`from_json`](Self::from_json) reads.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let file = CatalogFile {
            projects: self.projects.values().cloned().collect(),
            publications: self.publications.values().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Catalog seeded with the sample portfolio content.
    pub fn sample() -> Self {
        let mut catalog = Self::new();
        for project in sample_projects() {
            catalog.insert_project(project);
        }
        for publication in sample_publications() {
            catalog.insert_publication(publication);
        }
        catalog
    }

    fn insert_project(&mut self, new: NewProject) -> Project {
        let id = self.next_project_id;
        self.next_project_id += 1;
        let project = Project {
            id,
            name: new.name,
            description: new.description,
            technologies: new.technologies,
            status: new.status,
            metrics: new.metrics,
            github_url: new.github_url,
            demo_url: new.demo_url,
            featured: new.featured,
        };
        self.projects.insert(id, project.clone());
        project
    }

    fn insert_publication(&mut self, new: NewPublication) -> Publication {
        let id = self.next_publication_id;
        self.next_publication_id += 1;
        let publication = Publication {
            id,
            title: new.title,
            authors: new.authors,
            kind: new.kind,
            venue: new.venue,
            year: new.year,
            summary: new.summary,
            doi: new.doi,
            pdf_url: new.pdf_url,
            keywords: new.keywords,
            status: new.status,
        };
        self.publications.insert(id, publication.clone());
        publication
    }
}

impl Default for MemCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for MemCatalog {
    fn projects(&self, filter: ProjectFilter) -> Vec<Project> {
        let mut projects: Vec<Project> = self
            .projects
            .values()
            .filter(|p| !filter.featured_only || p.featured)
            .cloned()
            .collect();
        // Stable sort keeps id order within each group
        projects.sort_by_key(|p| !p.featured);
        projects
    }

    fn project(&self, id: u32) -> Result<Project, CatalogError> {
        self.projects
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound { kind: PROJECT, id })
    }

    fn create_project(&mut self, new: NewProject) -> Result<Project, CatalogError> {
        validate_project(&new.name, &new.description)?;
        let project = self.insert_project(new);
        tracing::info!(id = project.id, name = %project.name, "project created");
        Ok(project)
    }

    fn update_project(&mut self, id: u32, patch: ProjectPatch) -> Result<Project, CatalogError> {
        let mut updated = self.project(id)?;
        if let Some(name) = patch.name {
            updated.name = name;
        }
        if let Some(description) = patch.description {
            updated.description = description;
        }
        if let Some(technologies) = patch.technologies {
            updated.technologies = technologies;
        }
        if let Some(status) = patch.status {
            updated.status = status;
        }
        if let Some(metrics) = patch.metrics {
            updated.metrics = Some(metrics);
        }
        if let Some(github_url) = patch.github_url {
            updated.github_url = Some(github_url);
        }
        if let Some(demo_url) = patch.demo_url {
            updated.demo_url = Some(demo_url);
        }
        if let Some(featured) = patch.featured {
            updated.featured = featured;
        }
        validate_project(&updated.name, &updated.description)?;

        self.projects.insert(id, updated.clone());
        tracing::info!(id, "project updated");
        Ok(updated)
    }

    fn delete_project(&mut self, id: u32) -> Result<(), CatalogError> {
        self.projects
            .remove(&id)
            .map(|_| tracing::info!(id, "project deleted"))
            .ok_or(CatalogError::NotFound { kind: PROJECT, id })
    }

    fn publications(&self, kind: Option<PublicationKind>) -> Vec<Publication> {
        let mut publications: Vec<Publication> = self
            .publications
            .values()
            .filter(|p| kind.is_none_or(|k| p.kind == k))
            .cloned()
            .collect();
        publications.sort_by(|a, b| b.year.cmp(&a.year));
        publications
    }

    fn publication(&self, id: u32) -> Result<Publication, CatalogError> {
        self.publications
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound {
                kind: PUBLICATION,
                id,
            })
    }

    fn create_publication(&mut self, new: NewPublication) -> Result<Publication, CatalogError> {
        validate_publication(&new.title, &new.authors, &new.venue, new.year)?;
        let publication = self.insert_publication(new);
        tracing::info!(id = publication.id, title = %publication.title, "publication created");
        Ok(publication)
    }

    fn update_publication(
        &mut self,
        id: u32,
        patch: PublicationPatch,
    ) -> Result<Publication, CatalogError> {
        let mut updated = self.publication(id)?;
        if let Some(title) = patch.title {
            updated.title = title;
        }
        if let Some(authors) = patch.authors {
            updated.authors = authors;
        }
        if let Some(kind) = patch.kind {
            updated.kind = kind;
        }
        if let Some(venue) = patch.venue {
            updated.venue = venue;
        }
        if let Some(year) = patch.year {
            updated.year = year;
        }
        if let Some(summary) = patch.summary {
            updated.summary = Some(summary);
        }
        if let Some(doi) = patch.doi {
            updated.doi = Some(doi);
        }
        if let Some(pdf_url) = patch.pdf_url {
            updated.pdf_url = Some(pdf_url);
        }
        if let Some(keywords) = patch.keywords {
            updated.keywords = keywords;
        }
        if let Some(status) = patch.status {
            updated.status = status;
        }
        validate_publication(&updated.title, &updated.authors, &updated.venue, updated.year)?;

        self.publications.insert(id, updated.clone());
        tracing::info!(id, "publication updated");
        Ok(updated)
    }

    fn delete_publication(&mut self, id: u32) -> Result<(), CatalogError> {
        self.publications
            .remove(&id)
            .map(|_| tracing::info!(id, "publication deleted"))
            .ok_or(CatalogError::NotFound {
                kind: PUBLICATION,
                id,
            })
    }
}

fn invalid(kind: &'static str, reason: impl Into<String>) -> CatalogError {
    CatalogError::Invalid {
        kind,
        reason: reason.into(),
    }
}

fn require(kind: &'static str, field: &str, value: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(invalid(kind, format!("{field} is required")));
    }
    Ok(())
}

fn validate_project(name: &str, description: &str) -> Result<(), CatalogError> {
    require(PROJECT, "name", name)?;
    require(PROJECT, "description", description)
}

fn validate_publication(
    title: &str,
    authors: &str,
    venue: &str,
    year: i32,
) -> Result<(), CatalogError> {
    require(PUBLICATION, "title", title)?;
    require(PUBLICATION, "authors", authors)?;
    require(PUBLICATION, "venue", venue)?;
    if !(1900..=2100).contains(&year) {
        return Err(invalid(PUBLICATION, format!("year {year} is out of range")));
    }
    Ok(())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample_projects() -> Vec<NewProject> {
    vec![
        NewProject {
            name: "E-Commerce Platform".to_string(),
            description: "A full-stack e-commerce platform with user authentication, payment \
                          processing, and an admin dashboard."
                .to_string(),
            technologies: strings(&["React", "Node.js", "MongoDB", "Stripe"]),
            status: ProjectStatus::Completed,
            metrics: Some("Users: 1,200+".to_string()),
            github_url: Some("https://github.com/johndoe/ecommerce".to_string()),
            demo_url: Some("https://ecommerce-demo.com".to_string()),
            featured: false,
        },
        NewProject {
            name: "Task Management App".to_string(),
            description: "A collaborative task manager with real-time updates, drag-and-drop \
                          boards, and team collaboration features."
                .to_string(),
            technologies: strings(&["Vue.js", "Express", "Socket.io", "PostgreSQL"]),
            status: ProjectStatus::InProgress,
            metrics: Some("Teams: 150+".to_string()),
            github_url: Some("https://github.com/johndoe/taskapp".to_string()),
            demo_url: Some("https://taskapp-demo.com".to_string()),
            featured: false,
        },
        NewProject {
            name: "DevOps Dashboard".to_string(),
            description: "A DevOps monitoring dashboard with real-time metrics, automated \
                          deployments, and incident management."
                .to_string(),
            technologies: strings(&["React", "Go", "Kubernetes", "Prometheus"]),
            status: ProjectStatus::Completed,
            metrics: Some("Stars: 2,400+".to_string()),
            github_url: Some("https://github.com/johndoe/devops-dashboard".to_string()),
            demo_url: Some("https://devops-demo.com".to_string()),
            featured: true,
        },
    ]
}

fn sample_publications() -> Vec<NewPublication> {
    vec![
        NewPublication {
            title: "Deep Learning Approaches for Real-Time Object Detection in Autonomous \
                    Vehicles"
                .to_string(),
            authors: "John Doe, Jane Smith, Bob Johnson".to_string(),
            kind: PublicationKind::Conference,
            venue: "IEEE Conference on Computer Vision and Pattern Recognition (CVPR)".to_string(),
            year: 2024,
            summary: Some(
                "Novel deep learning approaches for real-time object detection in autonomous \
                 vehicles, reaching 95% accuracy at 30ms inference time."
                    .to_string(),
            ),
            doi: Some("10.1109/CVPR.2024.12345".to_string()),
            pdf_url: Some("https://example.com/papers/cvpr2024.pdf".to_string()),
            keywords: strings(&[
                "deep learning",
                "object detection",
                "autonomous vehicles",
                "computer vision",
            ]),
            status: PublicationStatus::Published,
        },
        NewPublication {
            title: "Scalable Microservices Architecture for Cloud-Native Applications".to_string(),
            authors: "John Doe, Alice Cooper".to_string(),
            kind: PublicationKind::Journal,
            venue: "ACM Transactions on Software Engineering and Methodology".to_string(),
            year: 2023,
            summary: Some(
                "A microservices architecture that improves system reliability by 40% and cuts \
                 deployment time by 60%."
                    .to_string(),
            ),
            doi: Some("10.1145/3587102".to_string()),
            pdf_url: Some("https://example.com/papers/tosem2023.pdf".to_string()),
            keywords: strings(&[
                "microservices",
                "cloud computing",
                "software architecture",
                "scalability",
            ]),
            status: PublicationStatus::Published,
        },
        NewPublication {
            title: "Blockchain-Based Security Framework for IoT Networks".to_string(),
            authors: "John Doe, Robert Chen, Lisa Wong".to_string(),
            kind: PublicationKind::Conference,
            venue: "International Conference on Network Security (ICNS)".to_string(),
            year: 2024,
            summary: Some(
                "A blockchain-based framework that hardens IoT networks while keeping \
                 communication latency low."
                    .to_string(),
            ),
            doi: Some("10.1007/978-3-031-12345-6_15".to_string()),
            pdf_url: Some("https://example.com/papers/icns2024.pdf".to_string()),
            keywords: strings(&["blockchain", "IoT", "security", "distributed systems"]),
            status: PublicationStatus::Accepted,
        },
        NewPublication {
            title: "Machine Learning Optimization Techniques for Edge Computing".to_string(),
            authors: "John Doe, Maria Rodriguez".to_string(),
            kind: PublicationKind::Journal,
            venue: "IEEE Transactions on Mobile Computing".to_string(),
            year: 2024,
            summary: Some(
                "Optimization techniques for machine learning in resource-constrained edge \
                 environments."
                    .to_string(),
            ),
            doi: None,
            pdf_url: None,
            keywords: strings(&[
                "machine learning",
                "edge computing",
                "optimization",
                "mobile computing",
            ]),
            status: PublicationStatus::UnderReview,
        },
    ]
}
