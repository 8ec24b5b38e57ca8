//! Chinese place names to provider query terms.

use std::{
    collections::HashMap,
    sync::{Arc, LazyLock},
};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Municipality,
    ProvincialCapital,
    Prefecture,
    /// Municipality name followed directly by a district name.
    District,
}

impl EntryKind {
    pub fn is_city(self) -> bool {
        !matches!(self, EntryKind::District)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameEntry {
    pub local: &'static str,
    pub query: &'static str,
    pub kind: EntryKind,
}

const fn entry(local: &'static str, query: &'static str, kind: EntryKind) -> NameEntry {
    NameEntry { local, query, kind }
}

use EntryKind::{District, Municipality, Prefecture, ProvincialCapital};

const BUILTIN: &[NameEntry] = &[
    entry("北京", "Beijing", Municipality),
    entry("上海", "Shanghai", Municipality),
    entry("天津", "Tianjin", Municipality),
    entry("重庆", "Chongqing", Municipality),
    entry("广州", "Guangzhou", ProvincialCapital),
    entry("杭州", "Hangzhou", ProvincialCapital),
    entry("南京", "Nanjing", ProvincialCapital),
    entry("成都", "Chengdu", ProvincialCapital),
    entry("武汉", "Wuhan", ProvincialCapital),
    entry("西安", "Xian", ProvincialCapital),
    entry("济南", "Jinan", ProvincialCapital),
    entry("沈阳", "Shenyang", ProvincialCapital),
    entry("哈尔滨", "Harbin", ProvincialCapital),
    entry("长春", "Changchun", ProvincialCapital),
    entry("石家庄", "Shijiazhuang", ProvincialCapital),
    entry("太原", "Taiyuan", ProvincialCapital),
    entry("呼和浩特", "Hohhot", ProvincialCapital),
    entry("郑州", "Zhengzhou", ProvincialCapital),
    entry("合肥", "Hefei", ProvincialCapital),
    entry("南昌", "Nanchang", ProvincialCapital),
    entry("福州", "Fuzhou", ProvincialCapital),
    entry("长沙", "Changsha", ProvincialCapital),
    entry("南宁", "Nanning", ProvincialCapital),
    entry("海口", "Haikou", ProvincialCapital),
    entry("贵阳", "Guiyang", ProvincialCapital),
    entry("昆明", "Kunming", ProvincialCapital),
    entry("拉萨", "Lhasa", ProvincialCapital),
    entry("兰州", "Lanzhou", ProvincialCapital),
    entry("西宁", "Xining", ProvincialCapital),
    entry("银川", "Yinchuan", ProvincialCapital),
    entry("乌鲁木齐", "Urumqi", ProvincialCapital),
    entry("深圳", "Shenzhen", Prefecture),
    entry("青岛", "Qingdao", Prefecture),
    entry("大连", "Dalian", Prefecture),
    entry("厦门", "Xiamen", Prefecture),
    entry("苏州", "Suzhou", Prefecture),
    entry("无锡", "Wuxi", Prefecture),
    entry("宁波", "Ningbo", Prefecture),
    entry("温州", "Wenzhou", Prefecture),
    entry("佛山", "Foshan", Prefecture),
    entry("东莞", "Dongguan", Prefecture),
    entry("中山", "Zhongshan", Prefecture),
    entry("珠海", "Zhuhai", Prefecture),
    entry("惠州", "Huizhou", Prefecture),
    entry("江门", "Jiangmen", Prefecture),
    entry("肇庆", "Zhaoqing", Prefecture),
    entry("清远", "Qingyuan", Prefecture),
    entry("韶关", "Shaoguan", Prefecture),
    entry("河源", "Heyuan", Prefecture),
    entry("梅州", "Meizhou", Prefecture),
    entry("汕尾", "Shanwei", Prefecture),
    entry("阳江", "Yangjiang", Prefecture),
    entry("茂名", "Maoming", Prefecture),
    entry("湛江", "Zhanjiang", Prefecture),
    entry("潮州", "Chaozhou", Prefecture),
    entry("揭阳", "Jieyang", Prefecture),
    entry("云浮", "Yunfu", Prefecture),
    entry("北京海淀", "Beijing", District),
    entry("北京朝阳", "Beijing", District),
    entry("北京西城", "Beijing", District),
    entry("北京东城", "Beijing", District),
    entry("北京丰台", "Beijing", District),
    entry("北京石景山", "Beijing", District),
    entry("北京门头沟", "Beijing", District),
    entry("北京房山", "Beijing", District),
    entry("北京通州", "Beijing", District),
    entry("北京顺义", "Beijing", District),
    entry("北京昌平", "Beijing", District),
    entry("北京大兴", "Beijing", District),
    entry("北京怀柔", "Beijing", District),
    entry("北京平谷", "Beijing", District),
    entry("北京密云", "Beijing", District),
    entry("北京延庆", "Beijing", District),
    entry("上海浦东", "Shanghai", District),
    entry("上海黄浦", "Shanghai", District),
    entry("上海徐汇", "Shanghai", District),
    entry("上海长宁", "Shanghai", District),
    entry("上海静安", "Shanghai", District),
    entry("上海普陀", "Shanghai", District),
    entry("上海虹口", "Shanghai", District),
    entry("上海杨浦", "Shanghai", District),
    entry("上海闵行", "Shanghai", District),
    entry("上海宝山", "Shanghai", District),
    entry("上海嘉定", "Shanghai", District),
    entry("上海金山", "Shanghai", District),
    entry("上海松江", "Shanghai", District),
    entry("上海青浦", "Shanghai", District),
    entry("上海奉贤", "Shanghai", District),
    entry("上海崇明", "Shanghai", District),
];

static SHARED: LazyLock<Arc<NameTable>> =
    LazyLock::new(|| Arc::new(NameTable::new(BUILTIN.iter().copied())));

/// How a name was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Exact(&'a str),
    /// The input contained `key`, which maps to `query`.
    Contains { key: &'a str, query: &'a str },
    Unresolved,
}

/// Forward and reverse lookup between local names and provider query terms.
///
/// Built once, never mutated.
#[derive(Debug, Clone)]
pub struct NameTable {
    entries: Vec<NameEntry>,
    forward: HashMap<&'static str, &'static str>,
    reverse: HashMap<&'static str, &'static str>,
}

impl NameTable {
    /// Earlier entries win when two share a local name; only city-level entries
    /// feed the reverse map.
    pub fn new(entries: impl IntoIterator<Item = NameEntry>) -> Self {
        let mut kept = Vec::new();
        let mut forward = HashMap::new();
        let mut reverse = HashMap::new();

        for e in entries {
            if forward.contains_key(e.local) {
                continue;
            }
            forward.insert(e.local, e.query);
            if e.kind.is_city() {
                reverse.entry(e.query).or_insert(e.local);
            }
            kept.push(e);
        }

        Self { entries: kept, forward, reverse }
    }

    /// The built-in table, shared across the process.
    pub fn builtin() -> Arc<NameTable> {
        Arc::clone(&*SHARED)
    }

    pub fn entries(&self) -> &[NameEntry] {
        &self.entries
    }

    /// Exact match first, then the longest table key contained in `name`.
    /// Equal-length keys resolve to whichever comes first in the table.
    pub fn lookup(&self, name: &str) -> Resolution<'static> {
        if let Some(&query) = self.forward.get(name) {
            return Resolution::Exact(query);
        }

        let mut best: Option<&NameEntry> = None;
        for e in &self.entries {
            if !name.contains(e.local) {
                continue;
            }
            if best.is_none_or(|b| e.local.chars().count() > b.local.chars().count()) {
                best = Some(e);
            }
        }

        match best {
            Some(e) => Resolution::Contains { key: e.local, query: e.query },
            None => Resolution::Unresolved,
        }
    }

    /// Provider query term for `name`, or `name` itself when nothing matches.
    pub fn resolve<'a>(&self, name: &'a str) -> &'a str {
        match self.lookup(name) {
            Resolution::Exact(query) => {
                debug!(input = name, query, "name resolved by exact match");
                query
            }
            Resolution::Contains { key, query } => {
                debug!(input = name, key, query, "name resolved by containment");
                query
            }
            Resolution::Unresolved => {
                debug!(input = name, "name not in table, passing through");
                name
            }
        }
    }

    /// Local name for a provider query term, city-level entries only.
    pub fn local_name(&self, query: &str) -> Option<&'static str> {
        self.reverse.get(query).copied()
    }
}
