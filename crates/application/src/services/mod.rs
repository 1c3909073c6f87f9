mod domain_normalizer;

pub use domain_normalizer::DomainNormalizer;
