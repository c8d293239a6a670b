//! Landing page rendering with Handlebars template engine
//!
//! This module renders the marketing landing page to Markdown from the
//! featured coaches and saves it to the filesystem.

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Coach;

/// Default landing template
const DEFAULT_TEMPLATE: &str = include_str!("../../templates/landing.hbs");

const TEMPLATE_NAME: &str = "landing";

/// Benefit blurbs shown under the hero
const BENEFITS: [(&str, &str); 4] = [
    (
        "Personalized Programs",
        "Custom training and nutrition plans tailored to your goals and body type.",
    ),
    (
        "Proven Results",
        "Track record of transforming hundreds of athletes and competitors.",
    ),
    (
        "Expert Coaches",
        "Work with certified professionals with years of competitive experience.",
    ),
    (
        "Competition Prep",
        "Specialized programs for bodybuilding competitions and contests.",
    ),
];

#[derive(Debug, Serialize)]
struct BenefitData {
    title: &'static str,
    description: &'static str,
}

/// One coach card
#[derive(Debug, Serialize)]
struct CoachCardData {
    name: String,
    specialization: String,
    experience: u32,
    client_count: u32,
    description: String,
    specialties: String,
    success_rate: String,
    rating: String,
}

impl From<&Coach> for CoachCardData {
    fn from(coach: &Coach) -> Self {
        Self {
            name: coach.name.clone(),
            specialization: coach.specialization.clone(),
            experience: coach.experience,
            client_count: coach.client_count,
            description: coach.description.clone(),
            specialties: coach.specialties.join(", "),
            success_rate: format!("{:.1}", coach.success_rate),
            rating: format!("{:.1}", coach.rating),
        }
    }
}

/// Template data for rendering
#[derive(Debug, Serialize)]
struct LandingTemplateData {
    headline: &'static str,
    badge: &'static str,
    tagline: &'static str,
    primary_cta: &'static str,
    secondary_cta: &'static str,
    benefits_heading: &'static str,
    benefits_intro: &'static str,
    benefits: Vec<BenefitData>,
    coaches_heading: &'static str,
    coaches_intro: &'static str,
    coaches: Vec<CoachCardData>,
    closing_heading: &'static str,
    closing_text: &'static str,
}

impl LandingTemplateData {
    fn new(coaches: &[Coach]) -> Self {
        Self {
            headline: "Elite Bodybuilding Coaching for Serious Athletes",
            badge: "Transform Your Body Today",
            tagline: "Work with world-class bodybuilding coaches to build the physique you've \
                      always wanted. Personalized training, nutrition, and support to maximize \
                      your results.",
            primary_cta: "Start Your Transformation",
            secondary_cta: "View Success Stories",
            benefits_heading: "Why Choose Us?",
            benefits_intro: "Our proven system combines expert coaching, personalized programs, \
                             and continuous support to deliver exceptional results.",
            benefits: BENEFITS
                .iter()
                .map(|&(title, description)| BenefitData { title, description })
                .collect(),
            coaches_heading: "Meet Our Elite Coaches",
            coaches_intro: "Work with the best in the industry. Our coaches have competed at \
                            the highest levels and helped countless athletes achieve their dreams.",
            coaches: coaches
                .iter()
                .filter(|c| c.is_featured)
                .map(CoachCardData::from)
                .collect(),
            closing_heading: "Ready to Transform Your Physique?",
            closing_text: "Join hundreds of successful athletes who have achieved their \
                           bodybuilding goals with our expert coaching.",
        }
    }
}

/// Landing page renderer
pub struct LandingRenderer<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> LandingRenderer<'a> {
    /// Create a renderer with the built-in template
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars
            .register_template_string(TEMPLATE_NAME, DEFAULT_TEMPLATE)
            .context("Failed to register default landing template")?;

        Ok(Self { handlebars })
    }

    /// Create a renderer with a custom template file
    pub fn with_template(template_path: &Path) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars
            .register_template_file(TEMPLATE_NAME, template_path)
            .with_context(|| {
                format!(
                    "Failed to register custom template: {}",
                    template_path.display()
                )
            })?;

        Ok(Self { handlebars })
    }

    /// Render the landing page; only featured coaches get a card
    pub fn render(&self, coaches: &[Coach]) -> Result<String> {
        let data = LandingTemplateData::new(coaches);
        self.handlebars
            .render(TEMPLATE_NAME, &data)
            .context("Failed to render landing template")
    }

    /// Render and write the landing page, creating parent directories
    pub fn save(&self, path: &Path, coaches: &[Coach]) -> Result<PathBuf> {
        let markdown = self.render(coaches)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(path, markdown)
            .with_context(|| format!("Failed to write to file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "Saved landing page");
        Ok(path.to_path_buf())
    }
}
