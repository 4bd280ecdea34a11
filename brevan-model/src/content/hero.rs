use crate::slide::Slide;

const HERO_IMAGES: [(&str, &str); 4] = [
    ("assets/images/hero/hero-01.jpg", "Façade de La Maison Brevan"),
    ("assets/images/hero/hero-02.jpg", "Le jardin au printemps"),
    ("assets/images/hero/hero-03.jpg", "Le salon et sa cheminée"),
    ("assets/images/hero/hero-04.jpg", "Le canal de Nantes à Brest"),
];

/// Slides for the home page banner. The first one is above the fold.
pub fn hero_slides() -> Vec<Slide> {
    HERO_IMAGES
        .iter()
        .map(|(src, alt)| Slide::new(*src, *alt))
        .collect()
}
