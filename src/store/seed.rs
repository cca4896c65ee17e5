// Demo datasets the store starts from. Pets are only a fallback: once a
// session has persisted its own collection, these are never consulted
// again. Everything else is read-only catalog data.

use chrono::{Duration, NaiveDate, NaiveTime, Utc};

use crate::models::{
    Activity, ActivityDetail, Gender, JobCategory, JobListing, JobType, MediaKind, MedicalRecord,
    MedicalRecordKind, MedicalRecordStatus, OwnedPet, OwnerProfile, Pet, PetStatus, PetType,
    Pharmacy, Post, PostAuthor, PostMedia, Vaccination, VaccinationStatus,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

pub fn pets() -> Vec<Pet> {
    vec![
        Pet {
            id: 1,
            name: "Buddy".to_string(),
            pet_type: PetType::Dog,
            breed: "Golden Retriever".to_string(),
            age: "3 years".to_string(),
            gender: Some(Gender::Male),
            weight: "32 kg".to_string(),
            microchip: "123456789012345".to_string(),
            image: "/images/Dog.jpg".to_string(),
            notes: String::new(),
            status: PetStatus::Healthy,
        },
        Pet {
            id: 2,
            name: "Whiskers".to_string(),
            pet_type: PetType::Cat,
            breed: "Persian".to_string(),
            age: "2 years".to_string(),
            gender: Some(Gender::Female),
            weight: "5 kg".to_string(),
            microchip: "987654321098765".to_string(),
            image: "/images/cat.jpg".to_string(),
            notes: String::new(),
            status: PetStatus::CheckupDue,
        },
        Pet {
            id: 3,
            name: "Charlie".to_string(),
            pet_type: PetType::Dog,
            breed: "Beagle".to_string(),
            age: "5 years".to_string(),
            gender: Some(Gender::Male),
            weight: "12 kg".to_string(),
            microchip: "112233445566778".to_string(),
            image: "/images/dog2.jpg".to_string(),
            notes: String::new(),
            status: PetStatus::Healthy,
        },
        Pet {
            id: 4,
            name: "Luna".to_string(),
            pet_type: PetType::Cat,
            breed: "Siamese".to_string(),
            age: "1 year".to_string(),
            gender: Some(Gender::Female),
            weight: "4 kg".to_string(),
            microchip: "11223445566778".to_string(),
            image: "/images/cat2.jpg".to_string(),
            notes: String::new(),
            status: PetStatus::Healthy,
        },
    ]
}

pub fn activities() -> Vec<Activity> {
    vec![
        Activity {
            id: 1,
            pet_name: "Buddy".to_string(),
            title: "Morning Walk".to_string(),
            detail: ActivityDetail::Walk {
                duration: "30 minutes".to_string(),
            },
            date: Some(date(2024, 1, 20)),
            time: Some(time(8, 30)),
            notes: "Beautiful morning walk in Central Park. Buddy was very energetic!".to_string(),
        },
        Activity {
            id: 2,
            pet_name: "Whiskers".to_string(),
            title: "Breakfast".to_string(),
            detail: ActivityDetail::Feeding {
                amount: "1/2 cup".to_string(),
            },
            date: Some(date(2024, 1, 20)),
            time: Some(time(7, 0)),
            notes: "Regular morning meal with new salmon flavor food".to_string(),
        },
        Activity {
            id: 3,
            pet_name: "Charlie".to_string(),
            title: "Vet Checkup".to_string(),
            detail: ActivityDetail::Vet,
            date: Some(date(2024, 1, 19)),
            time: Some(time(14, 0)),
            notes: "Annual checkup completed. All vitals normal. Next appointment in 6 months."
                .to_string(),
        },
        Activity {
            id: 4,
            pet_name: "Luna".to_string(),
            title: "Grooming Session".to_string(),
            detail: ActivityDetail::Grooming,
            date: Some(date(2024, 1, 18)),
            time: Some(time(11, 0)),
            notes: "Full grooming at PetSpa. Nail trim, bath, and brushing completed.".to_string(),
        },
    ]
}

pub fn medical_records() -> Vec<MedicalRecord> {
    vec![
        MedicalRecord {
            id: 1,
            pet_id: 1,
            date: date(2024, 1, 15),
            kind: MedicalRecordKind::Checkup,
            provider: "Dr. Smith".to_string(),
            notes: "Regular health checkup. All vitals normal.".to_string(),
            status: MedicalRecordStatus::Completed,
        },
        MedicalRecord {
            id: 2,
            pet_id: 1,
            date: date(2023, 12, 10),
            kind: MedicalRecordKind::Vaccination,
            provider: "Dr. Johnson".to_string(),
            notes: "Annual vaccination booster administered.".to_string(),
            status: MedicalRecordStatus::Completed,
        },
    ]
}

pub fn vaccinations() -> Vec<Vaccination> {
    vec![
        Vaccination {
            id: 1,
            pet_id: 1,
            vaccine: "Rabies".to_string(),
            date: date(2023, 12, 10),
            next_due: date(2024, 12, 10),
            status: VaccinationStatus::Current,
        },
        Vaccination {
            id: 2,
            pet_id: 1,
            vaccine: "DHPP".to_string(),
            date: date(2023, 11, 15),
            next_due: date(2024, 11, 15),
            status: VaccinationStatus::DueSoon,
        },
    ]
}

pub fn posts() -> Vec<Post> {
    let now = Utc::now();
    vec![
        Post {
            id: 1,
            author: PostAuthor {
                name: "Sarah Johnson".to_string(),
                avatar: "/images/per1.jpg".to_string(),
                location: "New York".to_string(),
            },
            content: "Look at my golden retriever Max enjoying his morning walk! He's such a good boy 🐕"
                .to_string(),
            media: Some(PostMedia {
                kind: MediaKind::Image,
                url: "/images/media1.jpg".to_string(),
                thumbnail: None,
            }),
            likes: 24,
            comments: 8,
            shares: 3,
            posted_at: now - Duration::hours(2),
            tags: vec![
                "#GoldenRetriever".to_string(),
                "#MorningWalk".to_string(),
                "#GoodBoy".to_string(),
            ],
        },
        Post {
            id: 2,
            author: PostAuthor {
                name: "Mike Chen".to_string(),
                avatar: "/images/per2.jpg".to_string(),
                location: "California".to_string(),
            },
            content: "Training session with my German Shepherd Rocky! He's learning new tricks every day 🎾"
                .to_string(),
            media: Some(PostMedia {
                kind: MediaKind::Video,
                url: "/videos/rocky-training.mp4".to_string(),
                thumbnail: Some("/images/rocky-thumb.jpg".to_string()),
            }),
            likes: 45,
            comments: 12,
            shares: 7,
            posted_at: now - Duration::hours(4),
            tags: vec![
                "#GermanShepherd".to_string(),
                "#Training".to_string(),
                "#SmartDog".to_string(),
            ],
        },
        Post {
            id: 3,
            author: PostAuthor {
                name: "Emma Wilson".to_string(),
                avatar: "/images/per1.jpg".to_string(),
                location: "Texas".to_string(),
            },
            content: "My cats Luna and Shadow having their afternoon nap together. They're inseparable! 😴"
                .to_string(),
            media: Some(PostMedia {
                kind: MediaKind::Image,
                url: "/images/media2.png".to_string(),
                thumbnail: None,
            }),
            likes: 67,
            comments: 15,
            shares: 4,
            posted_at: now - Duration::hours(6),
            tags: vec![
                "#CatsOfInstagram".to_string(),
                "#Siblings".to_string(),
                "#NapTime".to_string(),
            ],
        },
        Post {
            id: 4,
            author: PostAuthor {
                name: "David Rodriguez".to_string(),
                avatar: "/images/per2.jpg".to_string(),
                location: "Florida".to_string(),
            },
            content: "Beach day with my rescue pup Charlie! First time seeing the ocean and he loves it! 🌊"
                .to_string(),
            media: Some(PostMedia {
                kind: MediaKind::Image,
                url: "/images/dog2.jpg".to_string(),
                thumbnail: Some("/images/beach-thumb.jpg".to_string()),
            }),
            likes: 89,
            comments: 23,
            shares: 12,
            posted_at: now - Duration::hours(8),
            tags: vec![
                "#BeachDog".to_string(),
                "#RescuePup".to_string(),
                "#FirstTime".to_string(),
            ],
        },
    ]
}

pub fn jobs() -> Vec<JobListing> {
    let now = Utc::now();
    vec![
        JobListing {
            id: 1,
            title: "Veterinary Assistant".to_string(),
            company: "Happy Paws Veterinary Clinic".to_string(),
            location: "New York, NY".to_string(),
            job_type: JobType::FullTime,
            salary: "$35,000 - $45,000".to_string(),
            posted_at: now - Duration::days(2),
            description: "We are seeking a compassionate veterinary assistant to join our team. Experience with small animals preferred."
                .to_string(),
            requirements: vec![
                "High school diploma".to_string(),
                "Animal handling experience".to_string(),
                "Strong communication skills".to_string(),
                "Ability to work weekends".to_string(),
            ],
            benefits: vec![
                "Health insurance".to_string(),
                "Paid time off".to_string(),
                "Employee pet discounts".to_string(),
                "Professional development".to_string(),
            ],
            category: JobCategory::Veterinary,
            remote: false,
            urgent: false,
        },
        JobListing {
            id: 2,
            title: "Pet Groomer".to_string(),
            company: "Pampered Pets Salon".to_string(),
            location: "Los Angeles, CA".to_string(),
            job_type: JobType::PartTime,
            salary: "$20 - $30/hour".to_string(),
            posted_at: now - Duration::days(1),
            description: "Experienced pet groomer needed for busy salon. Must be skilled in various grooming techniques."
                .to_string(),
            requirements: vec![
                "Certified grooming training".to_string(),
                "2+ years experience".to_string(),
                "Own grooming tools".to_string(),
                "Patience with animals".to_string(),
            ],
            benefits: vec![
                "Flexible schedule".to_string(),
                "Commission bonuses".to_string(),
                "Continuing education support".to_string(),
            ],
            category: JobCategory::Grooming,
            remote: false,
            urgent: true,
        },
        JobListing {
            id: 3,
            title: "Pet Sitter / Dog Walker".to_string(),
            company: "POPO Pet Services".to_string(),
            location: "Chicago, IL".to_string(),
            job_type: JobType::Freelance,
            salary: "$15 - $25/hour".to_string(),
            posted_at: now - Duration::hours(3),
            description: "Join our network of trusted pet sitters and dog walkers. Flexible schedule, work when you want!"
                .to_string(),
            requirements: vec![
                "Love for animals".to_string(),
                "Reliable transportation".to_string(),
                "Background check".to_string(),
                "Smartphone with app".to_string(),
            ],
            benefits: vec![
                "Flexible hours".to_string(),
                "Weekly payments".to_string(),
                "Insurance coverage".to_string(),
                "24/7 support".to_string(),
            ],
            category: JobCategory::PetCare,
            remote: false,
            urgent: false,
        },
        JobListing {
            id: 4,
            title: "Veterinary Technician".to_string(),
            company: "Animal Emergency Hospital".to_string(),
            location: "Miami, FL".to_string(),
            job_type: JobType::FullTime,
            salary: "$45,000 - $55,000".to_string(),
            posted_at: now - Duration::days(5),
            description: "Licensed veterinary technician needed for emergency animal hospital. Night shifts available."
                .to_string(),
            requirements: vec![
                "Licensed Vet Tech".to_string(),
                "Emergency experience preferred".to_string(),
                "Strong multitasking skills".to_string(),
                "Compassionate nature".to_string(),
            ],
            benefits: vec![
                "Competitive salary".to_string(),
                "Health benefits".to_string(),
                "Retirement plan".to_string(),
                "Shift differentials".to_string(),
            ],
            category: JobCategory::Veterinary,
            remote: false,
            urgent: true,
        },
        JobListing {
            id: 5,
            title: "Pet Store Manager".to_string(),
            company: "Pets & More Superstore".to_string(),
            location: "Austin, TX".to_string(),
            job_type: JobType::FullTime,
            salary: "$50,000 - $65,000".to_string(),
            posted_at: now - Duration::weeks(1),
            description: "Manage daily operations of busy pet store. Leadership experience and pet knowledge required."
                .to_string(),
            requirements: vec![
                "Management experience".to_string(),
                "Pet industry knowledge".to_string(),
                "Customer service skills".to_string(),
                "Inventory management".to_string(),
            ],
            benefits: vec![
                "Management bonus".to_string(),
                "Employee discounts".to_string(),
                "Health insurance".to_string(),
                "Career advancement".to_string(),
            ],
            category: JobCategory::Retail,
            remote: false,
            urgent: false,
        },
        JobListing {
            id: 6,
            title: "Remote Pet Content Writer".to_string(),
            company: "Pet Life Magazine".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::Contract,
            salary: "$25 - $40/hour".to_string(),
            posted_at: now - Duration::days(4),
            description: "Write engaging content about pet care, training, and health for our online magazine and blog."
                .to_string(),
            requirements: vec![
                "Excellent writing skills".to_string(),
                "Pet knowledge".to_string(),
                "SEO experience".to_string(),
                "Portfolio of published work".to_string(),
            ],
            benefits: vec![
                "Remote work".to_string(),
                "Flexible deadlines".to_string(),
                "Byline credit".to_string(),
                "Networking opportunities".to_string(),
            ],
            category: JobCategory::Content,
            remote: true,
            urgent: false,
        },
    ]
}

pub fn owners() -> Vec<OwnerProfile> {
    vec![
        OwnerProfile {
            id: 1,
            name: "Sarah Johnson".to_string(),
            avatar: "/placeholder.svg?height=100&width=100".to_string(),
            location: "Central Park Area".to_string(),
            distance: "0.5 miles".to_string(),
            pets: vec![
                OwnedPet {
                    name: "Max".to_string(),
                    pet_type: PetType::Dog,
                    breed: "Labrador".to_string(),
                },
                OwnedPet {
                    name: "Bella".to_string(),
                    pet_type: PetType::Cat,
                    breed: "Persian".to_string(),
                },
            ],
            bio: "Love taking my dogs for morning walks! Always looking for playmates.".to_string(),
            joined: date(2023, 8, 15),
            rating: 4.8,
        },
        OwnerProfile {
            id: 2,
            name: "Mike Chen".to_string(),
            avatar: "/placeholder.svg?height=100&width=100".to_string(),
            location: "Downtown".to_string(),
            distance: "1.2 miles".to_string(),
            pets: vec![OwnedPet {
                name: "Rocky".to_string(),
                pet_type: PetType::Dog,
                breed: "German Shepherd".to_string(),
            }],
            bio: "Professional dog trainer. Happy to share tips and advice!".to_string(),
            joined: date(2023, 6, 20),
            rating: 4.9,
        },
        OwnerProfile {
            id: 3,
            name: "Emma Wilson".to_string(),
            avatar: "/placeholder.svg?height=100&width=100".to_string(),
            location: "Riverside".to_string(),
            distance: "2.1 miles".to_string(),
            pets: vec![
                OwnedPet {
                    name: "Tweety".to_string(),
                    pet_type: PetType::Bird,
                    breed: "Canary".to_string(),
                },
                OwnedPet {
                    name: "Polly".to_string(),
                    pet_type: PetType::Bird,
                    breed: "Parrot".to_string(),
                },
            ],
            bio: "Bird enthusiast and veterinary student. Love connecting with fellow pet owners!"
                .to_string(),
            joined: date(2023, 9, 10),
            rating: 4.7,
        },
        OwnerProfile {
            id: 4,
            name: "David Rodriguez".to_string(),
            avatar: "/placeholder.svg?height=100&width=100".to_string(),
            location: "Westside".to_string(),
            distance: "1.8 miles".to_string(),
            pets: vec![
                OwnedPet {
                    name: "Luna".to_string(),
                    pet_type: PetType::Cat,
                    breed: "Maine Coon".to_string(),
                },
                OwnedPet {
                    name: "Shadow".to_string(),
                    pet_type: PetType::Cat,
                    breed: "British Shorthair".to_string(),
                },
            ],
            bio: "Cat dad of two beautiful felines. Always up for pet care discussions!".to_string(),
            joined: date(2023, 7, 5),
            rating: 4.6,
        },
    ]
}

pub fn pharmacies() -> Vec<Pharmacy> {
    vec![
        Pharmacy {
            id: 1,
            name: "PetCare Pharmacy".to_string(),
            address: "123 Main Street, Downtown".to_string(),
            phone: "(555) 123-4567".to_string(),
            distance: "0.8 miles".to_string(),
            rating: 4.8,
            hours: "Mon-Fri: 8AM-8PM, Sat-Sun: 9AM-6PM".to_string(),
            services: vec![
                "Prescription Delivery".to_string(),
                "Emergency Orders".to_string(),
                "Consultation".to_string(),
            ],
        },
        Pharmacy {
            id: 2,
            name: "Animal Health Plus".to_string(),
            address: "456 Oak Avenue, Westside".to_string(),
            phone: "(555) 987-6543".to_string(),
            distance: "1.2 miles".to_string(),
            rating: 4.6,
            hours: "Mon-Sat: 9AM-7PM, Sun: 10AM-5PM".to_string(),
            services: vec![
                "Same Day Delivery".to_string(),
                "Online Ordering".to_string(),
                "Pet Nutrition".to_string(),
            ],
        },
        Pharmacy {
            id: 3,
            name: "VetMed Express".to_string(),
            address: "789 Pine Road, Riverside".to_string(),
            phone: "(555) 456-7890".to_string(),
            distance: "2.1 miles".to_string(),
            rating: 4.9,
            hours: "24/7 Emergency Service".to_string(),
            services: vec![
                "24/7 Service".to_string(),
                "Prescription Delivery".to_string(),
                "Emergency Orders".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_counts_match_the_demo_catalog() {
        assert_eq!(pets().len(), 4);
        assert_eq!(activities().len(), 4);
        assert_eq!(medical_records().len(), 2);
        assert_eq!(vaccinations().len(), 2);
        assert_eq!(posts().len(), 4);
        assert_eq!(jobs().len(), 6);
        assert_eq!(owners().len(), 4);
        assert_eq!(pharmacies().len(), 3);
    }

    #[test]
    fn seed_ids_are_unique_per_collection() {
        let pets = pets();
        let mut ids: Vec<_> = pets.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), pets.len());

        let jobs = jobs();
        let mut ids: Vec<_> = jobs.iter().map(|j| j.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), jobs.len());
    }
}
