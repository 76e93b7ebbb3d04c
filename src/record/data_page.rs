pub const DEFAULT_PAGE_SIZE: i32 = 20;

pub struct DataPage {
    id: i32,
    keys: Vec<String>,
}

impl DataPage {
    pub fn new(id: i32, keys: Vec<String>) -> DataPage {
        DataPage { id, keys }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn num_records(&self) -> i32 {
        self.keys.len() as i32
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }
}

pub fn paginate(keys: &[String], page_size: i32) -> Vec<DataPage> {
    let size = page_size.max(1) as usize;
    keys.chunks(size)
        .enumerate()
        .map(|(id, chunk)| DataPage::new(id as i32, chunk.to_vec()))
        .collect()
}
