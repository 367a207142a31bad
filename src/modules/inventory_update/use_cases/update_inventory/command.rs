/// Form fields of one inventory update upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInventory {
    pub inventory: Vec<u8>,
    pub sales: Vec<u8>,
    pub period: String,
}

/// The workbook handed back as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedWorkbook {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
