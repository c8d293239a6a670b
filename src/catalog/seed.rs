//! Built-in seed data for the catalog

use chrono::{DateTime, Utc};

use crate::models::{Coach, TrainingProgram};

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Seed coaches in display order
pub fn coaches() -> Vec<Coach> {
    vec![
        Coach {
            id: 1,
            name: "Marcus Steel".to_string(),
            specialization: "Competitive Bodybuilding".to_string(),
            description: "Former Mr. Olympia competitor with 15 years of experience in elite bodybuilding. Specializes in contest preparation and advanced muscle development techniques.".to_string(),
            experience: 15,
            client_count: 250,
            success_rate: 94.5,
            rating: 4.9,
            profile_image: Some(
                "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400".to_string(),
            ),
            specialties: labels(&["Contest Prep", "Advanced Training", "Posing", "Peak Week"]),
            is_featured: true,
            certifications: labels(&["IFBB Pro Card", "NASM-CPT", "Precision Nutrition Level 2"]),
            email: "marcus@elitefitnesscoach.com".to_string(),
            hourly_rate: 150.00,
            is_available: true,
        },
        Coach {
            id: 3,
            name: "Tony \"The Tank\" Rodriguez".to_string(),
            specialization: "Mass Building & Strength".to_string(),
            description: "Powerlifting champion turned bodybuilding coach. Specializes in building serious mass and strength for aspiring bodybuilders and strength athletes.".to_string(),
            experience: 18,
            client_count: 320,
            success_rate: 92.8,
            rating: 4.7,
            profile_image: Some(
                "https://images.unsplash.com/photo-1583454110551-21f2fa2afe61?w=400".to_string(),
            ),
            specialties: labels(&[
                "Mass Building",
                "Powerlifting",
                "Strength Training",
                "Progressive Overload",
            ]),
            is_featured: true,
            certifications: labels(&["USAPL Certified", "NSCA-CSCS", "Starting Strength Coach"]),
            email: "tony@elitefitnesscoach.com".to_string(),
            hourly_rate: 120.00,
            is_available: true,
        },
        Coach {
            id: 4,
            name: "Dr. Elena Volkov".to_string(),
            specialization: "Scientific Training & Recovery".to_string(),
            description: "PhD in Exercise Physiology with focus on evidence-based training methods. Combines cutting-edge science with practical bodybuilding application.".to_string(),
            experience: 10,
            client_count: 150,
            success_rate: 97.1,
            rating: 4.9,
            profile_image: Some(
                "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=400".to_string(),
            ),
            specialties: labels(&[
                "Scientific Training",
                "Recovery Optimization",
                "Periodization",
                "Sports Nutrition",
            ]),
            is_featured: false,
            certifications: labels(&["PhD Exercise Physiology", "ACSM-CEP", "ISSN-CISSN"]),
            email: "elena@elitefitnesscoach.com".to_string(),
            hourly_rate: 160.00,
            is_available: true,
        },
        Coach {
            id: 5,
            name: "Jake \"Titan\" Thompson".to_string(),
            specialization: "Classic Physique".to_string(),
            description: "Classic Physique specialist with aesthetic focus. Helps clients build the perfect balance of size, symmetry, and conditioning reminiscent of the Golden Era.".to_string(),
            experience: 8,
            client_count: 95,
            success_rate: 91.3,
            rating: 4.6,
            profile_image: Some(
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400".to_string(),
            ),
            specialties: labels(&[
                "Classic Physique",
                "Symmetry",
                "Aesthetic Training",
                "Golden Era Style",
            ]),
            is_featured: false,
            certifications: labels(&["ISSA-CFT", "NASM-CPT", "Precision Nutrition Level 1"]),
            email: "jake@elitefitnesscoach.com".to_string(),
            hourly_rate: 110.00,
            is_available: true,
        },
        Coach {
            id: 6,
            name: "Amanda Force".to_string(),
            specialization: "Transformation & Fat Loss".to_string(),
            description: "Transformation specialist who helps clients achieve dramatic physique changes. Expert in combining muscle building with strategic fat loss for complete body recomposition.".to_string(),
            experience: 9,
            client_count: 200,
            success_rate: 93.7,
            rating: 4.8,
            profile_image: Some(
                "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400".to_string(),
            ),
            specialties: labels(&[
                "Body Recomposition",
                "Fat Loss",
                "Muscle Building",
                "Lifestyle Coaching",
            ]),
            is_featured: true,
            certifications: labels(&["NASM-CPT", "NASM-CNC", "Precision Nutrition Coach"]),
            email: "amanda@elitefitnesscoach.com".to_string(),
            hourly_rate: 125.00,
            is_available: true,
        },
    ]
}

/// Seed programs, stamped with `seeded_at` as both creation and update time
pub fn programs(seeded_at: DateTime<Utc>) -> Vec<TrainingProgram> {
    vec![
        TrainingProgram {
            id: 1,
            name: "Elite Mass Builder".to_string(),
            description: "Intensive 16-week program designed to pack on serious muscle mass. Perfect for intermediate to advanced trainees looking to break through plateaus.".to_string(),
            duration_weeks: 16,
            difficulty_level: "Advanced".to_string(),
            goal: "Mass Building".to_string(),
            price: 299.99,
            coach_id: 3,
            coach: None,
            required_equipment: labels(&["Barbell", "Dumbbells", "Cable Machine", "Leg Press"]),
            target_muscles: labels(&["Full Body", "Compound Focus"]),
            is_featured: true,
            enrollment_count: 156,
            rating: 4.8,
            prerequisites: Vec::new(),
            expected_outcomes: Vec::new(),
            is_available: true,
            created_date: seeded_at,
            last_updated: seeded_at,
        },
        TrainingProgram {
            id: 2,
            name: "Competition Prep Masterclass".to_string(),
            description: "Complete 20-week contest preparation program covering training, nutrition, posing, and peak week strategies used by IFBB Pro competitors.".to_string(),
            duration_weeks: 20,
            difficulty_level: "Expert".to_string(),
            goal: "Competition Prep".to_string(),
            price: 499.99,
            coach_id: 1,
            coach: None,
            required_equipment: labels(&["Full Gym Access", "Posing Platform", "Cardio Equipment"]),
            target_muscles: labels(&["Full Body", "Conditioning Focus"]),
            is_featured: true,
            enrollment_count: 89,
            rating: 4.9,
            prerequisites: Vec::new(),
            expected_outcomes: Vec::new(),
            is_available: true,
            created_date: seeded_at,
            last_updated: seeded_at,
        },
        TrainingProgram {
            id: 3,
            name: "Women's Figure Excellence".to_string(),
            description: "Specialized 12-week program for women focusing on building lean muscle while maintaining feminine curves and proportions.".to_string(),
            duration_weeks: 12,
            difficulty_level: "Intermediate".to_string(),
            goal: "Figure Development".to_string(),
            price: 249.99,
            // No coach with id 2 is seeded
            coach_id: 2,
            coach: None,
            required_equipment: labels(&["Dumbbells", "Cable Machine", "Resistance Bands"]),
            target_muscles: labels(&["Glutes", "Shoulders", "Core", "Legs"]),
            is_featured: true,
            enrollment_count: 203,
            rating: 4.7,
            prerequisites: Vec::new(),
            expected_outcomes: Vec::new(),
            is_available: true,
            created_date: seeded_at,
            last_updated: seeded_at,
        },
        TrainingProgram {
            id: 4,
            name: "Scientific Strength & Size".to_string(),
            description: "Evidence-based 14-week program combining latest research in muscle hypertrophy with practical application for maximum results.".to_string(),
            duration_weeks: 14,
            difficulty_level: "Intermediate".to_string(),
            goal: "Strength & Hypertrophy".to_string(),
            price: 349.99,
            coach_id: 4,
            coach: None,
            required_equipment: labels(&["Barbell", "Dumbbells", "Cable Machine", "Bench"]),
            target_muscles: labels(&["Full Body", "Evidence-Based Programming"]),
            is_featured: false,
            enrollment_count: 67,
            rating: 4.9,
            prerequisites: Vec::new(),
            expected_outcomes: Vec::new(),
            is_available: true,
            created_date: seeded_at,
            last_updated: seeded_at,
        },
    ]
}
