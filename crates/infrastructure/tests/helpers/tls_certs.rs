#![allow(dead_code)]
use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer};
use std::sync::Arc;
use tokio_rustls::TlsAcceptor;

pub const TEST_TLS_HOSTNAME: &str = "localhost";

/// Self-signed certificate for `localhost` and an acceptor serving it.
pub struct TestCertificate {
    pub cert_der: CertificateDer<'static>,
    pub cert_pem: String,
    pub acceptor: TlsAcceptor,
}

impl TestCertificate {
    pub fn localhost() -> Self {
        let certified = rcgen::generate_simple_self_signed(vec![TEST_TLS_HOSTNAME.to_string()])
            .expect("generate self-signed certificate");

        let cert_der = certified.cert.der().clone();
        let cert_pem = certified.cert.pem();
        let key_der =
            PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(certified.key_pair.serialize_der()));

        let server_config = rustls::ServerConfig::builder_with_provider(Arc::new(
            rustls::crypto::ring::default_provider(),
        ))
        .with_safe_default_protocol_versions()
        .expect("protocol versions")
        .with_no_client_auth()
        .with_single_cert(vec![cert_der.clone()], key_der)
        .expect("server certificate");

        Self {
            cert_der,
            cert_pem,
            acceptor: TlsAcceptor::from(Arc::new(server_config)),
        }
    }

    /// Root store trusting only this certificate.
    pub fn root_store(&self) -> rustls::RootCertStore {
        let mut roots = rustls::RootCertStore::empty();
        roots
            .add(self.cert_der.clone())
            .expect("add test certificate to root store");
        roots
    }
}
