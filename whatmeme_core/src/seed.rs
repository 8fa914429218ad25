//! Built-in catalog used when no catalog file is configured.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::MemeRecord;

struct SeedEntry {
    id: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
    meaning: &'static str,
    origin: &'static str,
    examples: &'static [&'static str],
    tags: &'static [&'static str],
    contexts: &'static [&'static str],
    moods: &'static [&'static str],
    trend_rank: u32,
    popularity: u32,
    updated_at: &'static str,
}

const SEED: &[SeedEntry] = &[
    SeedEntry {
        id: "lucky-vicky",
        name: "럭키비키",
        aliases: &["럭비", "Lucky Vicky", "luckyvicky"],
        meaning: "운 좋은 원영, 모든 상황을 긍정적으로 해석하는 초긍정 마인드",
        origin: "아이브(IVE)의 장원영이 자신을 \"럭키비키(Lucky Vicky)\"라고 부르며 보여준 긍정적인 사고방식에서 유래. 나쁜 일도 자신에게 유리하게 재해석하는 태도를 표현한다.",
        examples: &[
            "비가 와서 약속 취소됨 → \"오늘 집에서 쉴 수 있어서 럭키비키~\"",
            "시험 망침 → \"이제 더 잘할 일만 남았으니 럭키비키!\"",
            "늦잠 잤는데 출근 시간 지남 → \"충분히 잤으니 오늘 컨디션 최고겠다 럭키비키\"",
        ],
        tags: &["긍정", "마인드", "아이돌", "원영"],
        contexts: &["시험", "실수", "지각", "약속", "위로"],
        moods: &["긍정", "행복"],
        trend_rank: 1,
        popularity: 95,
        updated_at: "2025-01-15",
    },
    SeedEntry {
        id: "jung-geom-ma",
        name: "중꺾마",
        aliases: &["중꺽마", "중꺼마", "중간에 꺾이지 않는 마음"],
        meaning: "중간에 꺾이지 않는 마음, 포기하지 않고 끝까지 밀고 나가는 의지",
        origin: "2022년 리그 오브 레전드 e스포츠에서 유래된 표현. 힘든 상황에서도 포기하지 않고 버티는 의지를 응원하는 말로 쓰인다.",
        examples: &[
            "시험 기간 중 → \"중꺾마! 조금만 더 하면 끝이야\"",
            "헬스장 가기 싫을 때 → \"중꺾마! 가기만 하면 됐어\"",
            "프로젝트 마감 전 → \"중꺾마로 버티자!\"",
        ],
        tags: &["동기부여", "e스포츠", "포기하지않기"],
        contexts: &["시험", "마감", "프로젝트", "운동", "도전"],
        moods: &["의지", "응원", "지침"],
        trend_rank: 2,
        popularity: 90,
        updated_at: "2025-01-10",
    },
    SeedEntry {
        id: "tiramisu-cake",
        name: "티라미수 케익",
        aliases: &["티라미수", "띠라띠라 미친미친", "tiramisu"],
        meaning: "띠라띠라 미친미친, 신나거나 흥분된 상태를 표현",
        origin: "티라미수 케익을 \"띠라띠라 미친미친\"으로 발음하는 영상에서 유래. 말이 안 되게 신나거나 흥분된 상태를 표현한다.",
        examples: &[
            "주말이라 신날 때 → \"오늘 티라미수 케익!\"",
            "친구들과 놀 때 → \"티라미수 케익 모드 온!\"",
            "기분 좋을 때 → \"띠라띠라 미친미친 상태\"",
        ],
        tags: &["신남", "흥분", "유쾌"],
        contexts: &["주말", "파티", "축하", "월급"],
        moods: &["신남", "흥분", "기쁨"],
        trend_rank: 3,
        popularity: 80,
        updated_at: "2025-01-12",
    },
    SeedEntry {
        id: "frozen-hangang",
        name: "꽁꽁 얼어붙은 한강",
        aliases: &["얼어붙은 한강", "꽁꽁 얼어", "한강 얼음"],
        meaning: "춥거나 경직된 분위기, 냉랭한 상황을 표현",
        origin: "한강이 꽁꽁 얼어붙은 것처럼 차갑고 경직된 분위기를 빗댄 밈. 대화가 안 풀리거나 분위기가 냉랭할 때 쓴다.",
        examples: &[
            "대화가 안 풀릴 때 → \"지금 분위기 꽁꽁 얼어붙은 한강 수준\"",
            "회의실 분위기가 어색할 때 → \"한강 얼음 같아\"",
            "차가운 반응 받을 때 → \"꽁꽁 얼어붙은 한강 같다\"",
        ],
        tags: &["추위", "분위기", "냉랭"],
        contexts: &["회의", "대화", "분위기", "겨울"],
        moods: &["어색", "냉랭"],
        trend_rank: 4,
        popularity: 70,
        updated_at: "2025-01-08",
    },
    SeedEntry {
        id: "hell-chang",
        name: "헬창",
        aliases: &["헬스장 중독", "운동 중독자", "헬스 마니아"],
        meaning: "헬스장에 빠져 사는 사람, 운동 열정러",
        origin: "헬스와 \"창\"을 합친 말로, 운동을 열정적으로 하는 사람을 가리킨다.",
        examples: &[
            "헬스장 가는 게 일상 → \"나 완전 헬창됐어\"",
            "운동 빼먹으면 불안할 때 → \"헬창의 삶\"",
            "다이어트 성공했을 때 → \"헬창 인증\"",
        ],
        tags: &["헬스", "운동", "건강"],
        contexts: &["헬스", "운동", "다이어트"],
        moods: &["열정", "뿌듯"],
        trend_rank: 5,
        popularity: 65,
        updated_at: "2025-01-05",
    },
    SeedEntry {
        id: "pelvic-dance",
        name: "골반춤",
        aliases: &["골반춤 밈", "힙댄스", "pelvic dance", "힙춤"],
        meaning: "골반을 움직이며 추는 춤, 아이돌 안무나 짧은 영상 밈에서 유래",
        origin: "K-pop 안무에서 골반을 흔드는 동작이 강조되며 시작된 밈. 쇼츠와 틱톡의 챌린지 영상으로 퍼졌다.",
        examples: &[
            "춤 안무 따라할 때 → \"골반춤 한 번 해볼까?\"",
            "짧은 영상 만들 때 → \"골반춤 밈으로 하나 올릴까?\"",
            "유행 안무 언급 → \"골반춤 진짜 중독적이야\"",
        ],
        tags: &["트렌드", "춤", "K-pop", "영상"],
        contexts: &["춤", "영상", "챌린지", "축제"],
        moods: &["신남", "흥"],
        trend_rank: 6,
        popularity: 60,
        updated_at: "2024-12-20",
    },
    SeedEntry {
        id: "eojjeol-tv",
        name: "어쩔티비",
        aliases: &["어쩔", "eojjeol", "어쩔 수 없지"],
        meaning: "\"어쩔 수 없지\"를 \"어쩔 티비\"로 바꿔 말하는 말장난",
        origin: "\"어쩔 수 없지\"를 말장난처럼 바꿔 말하면서 시작된 밈. \"안물티비\"로 이어지는 말장난 체인으로 10대 사이에서 유행했다.",
        examples: &[
            "할 수 없다고 할 때 → \"어쩔티비~\"",
            "잔소리 들을 때 → \"안 물어봤는데?\" \"안물티비~\"",
            "말장난 할 때 → \"어쩔티비 안물티비 뇌절티비\"",
        ],
        tags: &["트렌드", "말장난", "10대"],
        contexts: &["잔소리", "말싸움", "친구"],
        moods: &["짜증", "장난"],
        trend_rank: 7,
        popularity: 55,
        updated_at: "2024-11-30",
    },
    SeedEntry {
        id: "wonyoung-thinking",
        name: "원영적 사고",
        aliases: &["원영적사고", "원영 사고"],
        meaning: "불행한 상황도 결국 나에게 좋은 일로 받아들이는 초긍정 사고방식",
        origin: "장원영의 긍정적인 화법을 본떠 만든 표현. 럭키비키와 함께 쓰이며 어떤 상황이든 긍정적으로 뒤집어 말한다.",
        examples: &[
            "버스를 놓침 → \"덕분에 산책도 하고 완전 럭키비키잖아\"",
            "시험 점수가 낮음 → \"올라갈 일만 남았다는 뜻이지\"",
        ],
        tags: &["긍정", "원영", "사고방식"],
        contexts: &["실수", "시험", "위로"],
        moods: &["긍정", "행복"],
        trend_rank: 8,
        popularity: 85,
        updated_at: "2025-01-14",
    },
    SeedEntry {
        id: "god-saeng",
        name: "갓생",
        aliases: &["갓생러", "갓생 살기"],
        meaning: "부지런하고 계획적으로 사는 모범적인 삶",
        origin: "신을 뜻하는 \"갓(God)\"과 인생의 \"생\"을 합친 말. 아침 루틴과 공부, 운동을 꾸준히 하는 삶을 가리킨다.",
        examples: &[
            "새벽 기상 성공 → \"오늘부터 갓생 산다\"",
            "공부 계획 세울 때 → \"이번 방학은 갓생 모드\"",
        ],
        tags: &["자기계발", "루틴", "동기부여"],
        contexts: &["아침", "공부", "계획", "방학"],
        moods: &["의지", "뿌듯"],
        trend_rank: 9,
        popularity: 75,
        updated_at: "2025-01-03",
    },
    SeedEntry {
        id: "kal-toe",
        name: "칼퇴",
        aliases: &["칼퇴근", "정시퇴근"],
        meaning: "업무 시간이 끝나자마자 칼같이 퇴근하는 것",
        origin: "칼로 자르듯 정확한 시간에 퇴근한다는 뜻의 직장인 은어. 야근 문화에 지친 직장인의 바람을 담고 있다.",
        examples: &[
            "오후 6시 정각 → \"오늘은 무조건 칼퇴한다\"",
            "야근 예고에 → \"칼퇴의 꿈은 사라졌다\"",
        ],
        tags: &["직장", "회사", "퇴근"],
        contexts: &["퇴근", "회사", "야근", "직장"],
        moods: &["피곤", "해방감"],
        trend_rank: 10,
        popularity: 70,
        updated_at: "2025-01-11",
    },
];

impl SeedEntry {
    fn to_record(&self) -> MemeRecord {
        let owned =
            |items: &[&str]| -> Vec<String> { items.iter().map(ToString::to_string).collect() };
        MemeRecord {
            id: self.id.to_string(),
            name: self.name.to_string(),
            aliases: owned(self.aliases),
            meaning: self.meaning.to_string(),
            origin: self.origin.to_string(),
            examples: owned(self.examples),
            tags: owned(self.tags),
            contexts: owned(self.contexts),
            moods: owned(self.moods),
            trend_rank: self.trend_rank,
            popularity: self.popularity,
            updated_at: self.updated_at.to_string(),
        }
    }
}

/// The built-in records, in catalog order.
#[must_use]
pub fn seed_records() -> Vec<MemeRecord> {
    SEED.iter().map(SeedEntry::to_record).collect()
}

/// The built-in catalog.
pub fn seed_catalog() -> Result<Catalog> {
    Catalog::from_records(seed_records())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_is_valid() {
        assert!(seed_catalog().is_ok());
    }

    #[test]
    fn seed_trend_ranks_are_distinct() {
        let mut ranks: Vec<u32> = seed_records().iter().map(|r| r.trend_rank).collect();
        ranks.sort_unstable();
        ranks.dedup();
        assert_eq!(ranks.len(), seed_records().len());
    }
}
