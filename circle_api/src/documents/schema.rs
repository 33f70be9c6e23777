//! `/api/schema`: JSON-LD structured data (schema.org `@graph`).

use circle_core::ALL_FORMULAS;
use serde_json::{json, Value};

const ORGANIZATION: &str = "Circle Calculators";

/// (question, answer)
const FAQ: [(&str, &str); 4] = [
    (
        "What is the formula for area of a circle?",
        "The area of a circle formula is A = πr² where r is the radius. You can also use A = πd²/4 for diameter or A = C²/4π for circumference.",
    ),
    (
        "How do you find the area of a circle?",
        "To find area of a circle: 1) Square the radius (multiply it by itself), 2) Multiply by π (3.14159). For example, if radius = 5, then area = π × 5² = 78.54 square units.",
    ),
    (
        "Why is the area of a circle πr²?",
        "The formula A = πr² comes from integral calculus. Imagine dividing a circle into tiny triangular wedges - their combined area equals πr². This can be proven by integrating the circumference from 0 to r.",
    ),
    (
        "Can I calculate area from circumference?",
        "Yes! Use the formula A = C²/(4π) where C is the circumference. This is derived by first finding the radius from circumference (r = C/2π), then using A = πr².",
    ),
];

/// Build the JSON-LD document.
pub fn schema_document(site_url: &str) -> Value {
    let features: Vec<&str> = ALL_FORMULAS
        .iter()
        .map(|meta| meta.feature)
        .chain(["Step-by-step solutions", "Visual representations", "Real-world examples"])
        .collect();

    let methods: Vec<Value> = ALL_FORMULAS
        .iter()
        .map(|meta| {
            json!({
                "@type": "Thing",
                "name": meta.method_name,
                "description": meta.method_description(),
                "formula": meta.formula,
            })
        })
        .collect();

    let questions: Vec<Value> = FAQ
        .iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": { "@type": "Answer", "text": answer },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "WebApplication",
                "name": "Area of Circle Calculator",
                "url": site_url,
                "description": "Free online calculator to find the area of a circle using radius, diameter, or circumference",
                "applicationCategory": "EducationalApplication",
                "operatingSystem": "All",
                "offers": { "@type": "Offer", "price": "0", "priceCurrency": "USD" },
                "featureList": features,
                "author": { "@type": "Organization", "name": ORGANIZATION, "url": site_url },
                "creator": { "@type": "Organization", "name": ORGANIZATION },
            },
            {
                "@type": "Calculator",
                "name": "Circle Area Calculator",
                "url": site_url,
                "description": "Calculate the area of a circle from radius, diameter, or circumference",
                "potentialAction": {
                    "@type": "ComputeAction",
                    "target": {
                        "@type": "EntryPoint",
                        "urlTemplate": format!("{}/api/calculate", site_url),
                        "actionPlatform": ["DesktopWebPlatform", "MobileWebPlatform"],
                    },
                },
                "hasPart": methods,
            },
            {
                "@type": "FAQPage",
                "mainEntity": questions,
            },
            {
                "@type": "MathSolver",
                "name": "Area of Circle Solver",
                "url": site_url,
                "potentialAction": {
                    "@type": "SolveMathAction",
                    "eduQuestionType": "Area",
                    "mathExpression": "A = πr²",
                },
            },
            {
                "@type": "WebSite",
                "url": site_url,
                "name": "Area of Circle",
                "description": "Free online area of circle calculator with formulas and examples",
                "publisher": {
                    "@type": "Organization",
                    "name": ORGANIZATION,
                    "url": site_url,
                    "logo": { "@type": "ImageObject", "url": format!("{}/favicon.ico", site_url) },
                },
                "inLanguage": "en-US",
            },
            {
                "@type": "Thing",
                "name": "π (Pi)",
                "description": "Mathematical constant representing the ratio of a circle circumference to its diameter",
                "value": "3.14159265358979",
                "url": site_url,
            },
            {
                "@type": "Organization",
                "name": ORGANIZATION,
                "url": site_url,
                "contactPoint": { "@type": "ContactPoint", "contactType": "Customer Support", "url": site_url },
                "knowsAbout": ["Circle Mathematics", "Geometry", "Educational Tools"],
            },
        ]
    })
}
