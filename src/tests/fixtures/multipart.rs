use axum::body::Body;
use axum::http::Request;

use crate::modules::inventory_update::adapters::outbound::workbook::WorkbookWriter;
use crate::modules::inventory_update::adapters::outbound::workbook_xlsx::XlsxWorkbookWriter;
use crate::tests::fixtures::inventory::{InventoryTableBuilder, SalesTableBuilder};

const BOUNDARY: &str = "excel-up-boundary";

struct Part {
    name: String,
    file_name: Option<String>,
    bytes: Vec<u8>,
}

/// A `multipart/form-data` body for the inventory update upload.
pub struct MultipartBody {
    parts: Vec<Part>,
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl MultipartBody {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Two stocked products, one sale in March 2024 and one in the prior year.
    pub fn sample(period: &str) -> Self {
        let inventory = InventoryTableBuilder::new()
            .item("a-1", 10.0, 5.0, "Activo", "NBO")
            .item("b-2", 4.0, 2.5, "Descontinuado", "Norte")
            .build();
        let sales = SalesTableBuilder::new()
            .line("A1", 3.0, 200.0, 150.0, (15, 3, 2024))
            .line("B2", 5.0, 40.0, 30.0, (28, 2, 2024))
            .build();

        Self::new()
            .file("inv", XlsxWorkbookWriter.write("Hoja1", &inventory).unwrap())
            .file("ven", XlsxWorkbookWriter.write("Hoja1", &sales).unwrap())
            .field("period", period)
    }

    pub fn file(self, name: &str, bytes: Vec<u8>) -> Self {
        self.set(name, Some(format!("{name}.xlsx")), bytes)
    }

    pub fn field(self, name: &str, value: &str) -> Self {
        self.set(name, None, value.as_bytes().to_vec())
    }

    pub fn without(mut self, name: &str) -> Self {
        self.parts.retain(|p| p.name != name);
        self
    }

    fn set(mut self, name: &str, file_name: Option<String>, bytes: Vec<u8>) -> Self {
        let part = Part {
            name: name.to_string(),
            file_name,
            bytes,
        };
        match self.parts.iter_mut().find(|p| p.name == name) {
            Some(existing) => *existing = part,
            None => self.parts.push(part),
        }
        self
    }

    pub fn into_bytes(self) -> Vec<u8> {
        let mut body = Vec::new();
        for part in self.parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            let disposition = match &part.file_name {
                Some(file_name) => format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                    part.name
                ),
                None => format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", part.name),
            };
            body.extend_from_slice(disposition.as_bytes());
            body.extend_from_slice(&part.bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    pub fn into_request(self, path: &str) -> Request<Body> {
        Request::post(path)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(self.into_bytes()))
            .unwrap()
    }
}
