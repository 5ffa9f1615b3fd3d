//! The built-in Green Power product catalog.
//!
//! Thirteen cold-pressed oils with the copy shown on the storefront.
//! Catalog order here is display order everywhere: the filter engine and
//! the related-products lookup both preserve it.

use super::{Catalog, Category, Product, ProductId, Recipe};

impl Catalog {
    /// The static production catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            Product {
                id: ProductId::new(1),
                slug: "cedar".into(),
                name: "Масло кедра".into(),
                name_en: "Cedar Nut Oil".into(),
                price: 1890,
                category: Category::Nuts,
                omega: vec!["Омега-6".into(), "Омега-9".into()],
                tags: vec![
                    "Иммунитет".into(),
                    "Пищеварение".into(),
                    "Кожа и волосы".into(),
                ],
                benefits: vec![
                    "Укрепление иммунитета".into(),
                    "Здоровье ЖКТ".into(),
                    "Антиоксиданты".into(),
                ],
                description: "Сыродавленное масло из ядер сибирского кедрового ореха. \
                    Мягкий ореховый вкус и высокое содержание витамина E и цинка."
                    .into(),
                composition: "100% масло ядер кедрового ореха холодного отжима.".into(),
                usage: "Принимать по 1 чайной ложке утром натощак за 30 минут до еды.\n\
                    Добавлять в салаты, каши и готовые блюда. Не нагревать."
                    .into(),
                volume: "250 мл".into(),
                image: "/static/images/products/cedar.svg".into(),
                recipes: vec![Recipe {
                    title: "Салат с кедровым маслом и рукколой".into(),
                    description: "Лёгкий салат, раскрывающий ореховый вкус масла.".into(),
                    ingredients: vec![
                        "Руккола — 100 г".into(),
                        "Помидоры черри — 150 г".into(),
                        "Сыр пармезан — 30 г".into(),
                        "Масло кедра — 2 ст. ложки".into(),
                        "Соль, перец по вкусу".into(),
                    ],
                    instructions: vec![
                        "Вымойте рукколу и черри, разрежьте помидоры пополам.".into(),
                        "Выложите овощи на блюдо, посыпьте тёртым пармезаном.".into(),
                        "Полейте кедровым маслом, посолите и поперчите.".into(),
                    ],
                }],
            },
            Product {
                id: ProductId::new(2),
                slug: "flax".into(),
                name: "Масло льна".into(),
                name_en: "Flax Seed Oil".into(),
                price: 890,
                category: Category::Seeds,
                omega: vec!["Омега-3".into(), "Омега-6".into()],
                tags: vec![
                    "Мозг и память".into(),
                    "Кожа и волосы".into(),
                    "Сердце и сосуды".into(),
                ],
                benefits: vec![
                    "Мозговая активность".into(),
                    "Чистая кожа".into(),
                    "Здоровое сердце".into(),
                ],
                description: "Льняное масло первого холодного отжима — рекордсмен по \
                    содержанию Омега-3 среди растительных масел."
                    .into(),
                composition: "100% масло семян льна холодного отжима.".into(),
                usage: "Принимать по 1 столовой ложке утром натощак.\n\
                    Хранить в холодильнике, использовать в течение 30 дней после вскрытия."
                    .into(),
                volume: "250 мл".into(),
                image: "/static/images/products/flax.svg".into(),
                recipes: vec![
                    Recipe {
                        title: "Творог с льняным маслом".into(),
                        description: "Классическое сочетание по протоколу доктора Будвиг.".into(),
                        ingredients: vec![
                            "Творог 5% — 150 г".into(),
                            "Масло льна — 1 ст. ложка".into(),
                            "Мёд — 1 ч. ложка".into(),
                            "Горсть ягод".into(),
                        ],
                        instructions: vec![
                            "Разотрите творог с льняным маслом до однородности.".into(),
                            "Добавьте мёд и перемешайте.".into(),
                            "Украсьте ягодами и подавайте сразу.".into(),
                        ],
                    },
                    Recipe {
                        title: "Утренний смузи с Омега-3".into(),
                        description: "Быстрый завтрак с порцией незаменимых кислот.".into(),
                        ingredients: vec![
                            "Банан — 1 шт.".into(),
                            "Шпинат — 50 г".into(),
                            "Кефир — 200 мл".into(),
                            "Масло льна — 1 ч. ложка".into(),
                        ],
                        instructions: vec![
                            "Сложите все ингредиенты в блендер.".into(),
                            "Взбейте до однородности и подавайте.".into(),
                        ],
                    },
                ],
            },
            Product {
                id: ProductId::new(3),
                slug: "pumpkin".into(),
                name: "Масло тыквы".into(),
                name_en: "Pumpkin Seed Oil".into(),
                price: 990,
                category: Category::Seeds,
                omega: vec!["Омега-6".into(), "Омега-9".into()],
                tags: vec!["Мужское здоровье".into(), "Печень".into()],
                benefits: vec![
                    "Мужское здоровье".into(),
                    "Поддержка печени".into(),
                    "Витамин E".into(),
                ],
                description: "Густое тёмно-зелёное масло из обжаренных по щадящей \
                    технологии тыквенных семечек с характерным вкусом."
                    .into(),
                composition: "100% масло семян тыквы холодного отжима.".into(),
                usage: "Принимать по 1 чайной ложке 2 раза в день до еды.\n\
                    Подходит для заправки овощных салатов и крем-супов."
                    .into(),
                volume: "250 мл".into(),
                image: "/static/images/products/pumpkin.svg".into(),
                recipes: vec![Recipe {
                    title: "Тыквенный крем-суп".into(),
                    description: "Суп с каплей тыквенного масла перед подачей.".into(),
                    ingredients: vec![
                        "Тыква — 500 г".into(),
                        "Лук — 1 шт.".into(),
                        "Сливки — 100 мл".into(),
                        "Масло тыквы — 1 ст. ложка".into(),
                        "Тыквенные семечки для подачи".into(),
                    ],
                    instructions: vec![
                        "Отварите тыкву с луком до мягкости.".into(),
                        "Пробейте блендером, добавьте сливки и прогрейте.".into(),
                        "Разлейте по тарелкам, полейте маслом и посыпьте семечками.".into(),
                    ],
                }],
            },
            Product {
                id: ProductId::new(4),
                slug: "black-cumin".into(),
                name: "Масло чёрного тмина".into(),
                name_en: "Black Cumin Oil".into(),
                price: 1290,
                category: Category::Seeds,
                omega: vec!["Омега-6".into(), "Омега-9".into()],
                tags: vec!["Иммунитет".into(), "Очищение".into()],
                benefits: vec![
                    "Сильный иммунитет".into(),
                    "Антибактериальное".into(),
                    "Очищение организма".into(),
                ],
                description: "Пряное масло из семян чёрного тмина (калинджи) с \
                    терпким вкусом и выраженным тонизирующим действием."
                    .into(),
                composition: "100% масло семян чёрного тмина холодного отжима.".into(),
                usage: "Принимать по 1 чайной ложке утром, запивая водой с мёдом.\n\
                    Начинать с половины дозы, чтобы привыкнуть к терпкому вкусу."
                    .into(),
                volume: "100 мл".into(),
                image: "/static/images/products/black-cumin.svg".into(),
                recipes: vec![Recipe {
                    title: "Медовая вода с чёрным тмином".into(),
                    description: "Утренний тонизирующий напиток.".into(),
                    ingredients: vec![
                        "Тёплая вода — 200 мл".into(),
                        "Мёд — 1 ч. ложка".into(),
                        "Масло чёрного тмина — 0,5 ч. ложки".into(),
                    ],
                    instructions: vec![
                        "Растворите мёд в тёплой воде.".into(),
                        "Добавьте масло и сразу выпейте.".into(),
                    ],
                }],
            },
            Product {
                id: ProductId::new(5),
                slug: "walnut".into(),
                name: "Масло грецкого ореха".into(),
                name_en: "Walnut Oil".into(),
                price: 1490,
                category: Category::Nuts,
                omega: vec!["Омега-3".into(), "Омега-6".into()],
                tags: vec!["Мозг и память".into(), "Сердце и сосуды".into()],
                benefits: vec![
                    "Память и концентрация".into(),
                    "Крепкие сосуды".into(),
                    "Йод и витамины группы B".into(),
                ],
                description: "Ароматное масло из ядер грецкого ореха — источник \
                    Омега-3 и природного йода."
                    .into(),
                composition: "100% масло ядер грецкого ореха холодного отжима.".into(),
                usage: "Принимать по 1 десертной ложке утром натощак.\n\
                    Идеально для заправки тёплых овощных гарниров."
                    .into(),
                volume: "250 мл".into(),
                image: "/static/images/products/walnut.svg".into(),
                recipes: vec![Recipe {
                    title: "Свёкла с грецким маслом".into(),
                    description: "Закуска в грузинском стиле.".into(),
                    ingredients: vec![
                        "Свёкла отварная — 2 шт.".into(),
                        "Чеснок — 1 зубчик".into(),
                        "Масло грецкого ореха — 2 ст. ложки".into(),
                        "Кинза — небольшой пучок".into(),
                    ],
                    instructions: vec![
                        "Натрите свёклу на крупной тёрке, добавьте чеснок.".into(),
                        "Заправьте маслом, перемешайте и посыпьте кинзой.".into(),
                    ],
                }],
            },
            Product {
                id: ProductId::new(6),
                slug: "hemp".into(),
                name: "Масло конопли".into(),
                name_en: "Hemp Seed Oil".into(),
                price: 1190,
                category: Category::Seeds,
                omega: vec!["Омега-3".into(), "Омега-6".into()],
                tags: vec!["Кожа и волосы".into(), "Иммунитет".into()],
                benefits: vec![
                    "Идеальный баланс Омега-3 и Омега-6".into(),
                    "Здоровая кожа".into(),
                    "Поддержка иммунитета".into(),
                ],
                description: "Масло из семян пищевой конопли с травянистым вкусом и \
                    оптимальным соотношением жирных кислот 1:3."
                    .into(),
                composition: "100% масло семян конопли холодного отжима.".into(),
                usage: "Принимать по 1 столовой ложке в день во время еды.\n\
                    Хорошо сочетается с крупами и зелёными салатами."
                    .into(),
                volume: "250 мл".into(),
                image: "/static/images/products/hemp.svg".into(),
                recipes: vec![Recipe {
                    title: "Зелёный салат с конопляным маслом".into(),
                    description: "Максимум зелени и незаменимых кислот.".into(),
                    ingredients: vec![
                        "Микс салатных листьев — 150 г".into(),
                        "Огурец — 1 шт.".into(),
                        "Авокадо — 1 шт.".into(),
                        "Масло конопли — 2 ст. ложки".into(),
                        "Лимонный сок — 1 ч. ложка".into(),
                    ],
                    instructions: vec![
                        "Нарежьте огурец и авокадо, смешайте с листьями.".into(),
                        "Заправьте маслом с лимонным соком и подавайте.".into(),
                    ],
                }],
            },
            Product {
                id: ProductId::new(7),
                slug: "sesame".into(),
                name: "Масло кунжута".into(),
                name_en: "Sesame Seed Oil".into(),
                price: 790,
                category: Category::Seeds,
                omega: vec!["Омега-6".into(), "Омега-9".into()],
                tags: vec!["Кости и суставы".into(), "Кожа и волосы".into()],
                benefits: vec![
                    "Кальций для костей".into(),
                    "Эластичная кожа".into(),
                    "Антиоксидант сезамол".into(),
                ],
                description: "Светлое кунжутное масло из сырых семян — чемпион по \
                    содержанию кальция."
                    .into(),
                composition: "100% масло семян кунжута холодного отжима.".into(),
                usage: "Принимать по 1 чайной ложке 2 раза в день.\n\
                    Добавлять в овощные и тёплые блюда азиатской кухни."
                    .into(),
                volume: "250 мл".into(),
                image: "/static/images/products/sesame.svg".into(),
                recipes: vec![Recipe {
                    title: "Морковь по-азиатски".into(),
                    description: "Пикантный гарнир с кунжутной заправкой.".into(),
                    ingredients: vec![
                        "Морковь — 3 шт.".into(),
                        "Соевый соус — 1 ст. ложка".into(),
                        "Масло кунжута — 1 ст. ложка".into(),
                        "Семена кунжута — 1 ч. ложка".into(),
                    ],
                    instructions: vec![
                        "Натрите морковь тонкой соломкой.".into(),
                        "Смешайте соевый соус с маслом и заправьте.".into(),
                        "Посыпьте кунжутом и дайте настояться 15 минут.".into(),
                    ],
                }],
            },
            Product {
                id: ProductId::new(8),
                slug: "sunflower".into(),
                name: "Масло подсолнечника".into(),
                name_en: "Sunflower Seed Oil".into(),
                price: 590,
                category: Category::Seeds,
                omega: vec!["Омега-6".into(), "Омега-9".into()],
                tags: vec!["Сердце и сосуды".into(), "Пищеварение".into()],
                benefits: vec![
                    "Витамин E".into(),
                    "Мягкое пищеварение".into(),
                    "Вкус настоящей семечки".into(),
                ],
                description: "Сыродавленное подсолнечное масло с ароматом свежих \
                    семечек — ничего общего с рафинированным из магазина."
                    .into(),
                composition: "100% масло семян подсолнечника холодного отжима.".into(),
                usage: "Использовать для заправки салатов и готовых блюд.\n\
                    Не использовать для жарки."
                    .into(),
                volume: "350 мл".into(),
                image: "/static/images/products/sunflower.svg".into(),
                recipes: vec![Recipe {
                    title: "Квашеная капуста с маслом".into(),
                    description: "Простая закуска из русской кухни.".into(),
                    ingredients: vec![
                        "Квашеная капуста — 300 г".into(),
                        "Красный лук — 1 шт.".into(),
                        "Масло подсолнечника — 2 ст. ложки".into(),
                    ],
                    instructions: vec![
                        "Нарежьте лук тонкими полукольцами.".into(),
                        "Смешайте с капустой и заправьте маслом.".into(),
                    ],
                }],
            },
            Product {
                id: ProductId::new(9),
                slug: "mustard".into(),
                name: "Масло горчицы".into(),
                name_en: "Mustard Seed Oil".into(),
                price: 690,
                category: Category::Seeds,
                omega: vec!["Омега-3".into(), "Омега-6".into()],
                tags: vec!["Пищеварение".into(), "Иммунитет".into()],
                benefits: vec![
                    "Стимулирует пищеварение".into(),
                    "Природный антисептик".into(),
                    "Долго хранится".into(),
                ],
                description: "Пикантное горчичное масло с мягкой остринкой; благодаря \
                    природным антиоксидантам дольше других сохраняет свежесть."
                    .into(),
                composition: "100% масло семян горчицы холодного отжима.".into(),
                usage: "Принимать по 1 чайной ложке утром до еды.\n\
                    Отлично оттеняет винегреты и печёные овощи."
                    .into(),
                volume: "250 мл".into(),
                image: "/static/images/products/mustard.svg".into(),
                recipes: vec![Recipe {
                    title: "Винегрет с горчичным маслом".into(),
                    description: "Традиционный салат с пикантной заправкой.".into(),
                    ingredients: vec![
                        "Свёкла, морковь, картофель отварные — по 2 шт.".into(),
                        "Солёные огурцы — 2 шт.".into(),
                        "Зелёный горошек — 100 г".into(),
                        "Масло горчицы — 2 ст. ложки".into(),
                    ],
                    instructions: vec![
                        "Нарежьте овощи кубиком и смешайте с горошком.".into(),
                        "Заправьте горчичным маслом и перемешайте.".into(),
                    ],
                }],
            },
            Product {
                id: ProductId::new(10),
                slug: "milk-thistle".into(),
                name: "Масло расторопши".into(),
                name_en: "Milk Thistle Oil".into(),
                price: 850,
                category: Category::Seeds,
                omega: vec!["Омега-6".into(), "Омега-9".into()],
                tags: vec!["Печень".into(), "Очищение".into()],
                benefits: vec![
                    "Силимарин для печени".into(),
                    "Мягкое очищение".into(),
                    "Восстановление после нагрузок".into(),
                ],
                description: "Масло из семян расторопши пятнистой — традиционная \
                    поддержка печени и желчевыводящих путей."
                    .into(),
                composition: "100% масло семян расторопши холодного отжима.".into(),
                usage: "Принимать по 1 чайной ложке 3 раза в день до еды.\n\
                    Курс — 1 месяц, далее перерыв."
                    .into(),
                volume: "100 мл".into(),
                image: "/static/images/products/milk-thistle.svg".into(),
                recipes: vec![Recipe {
                    title: "Овсянка с маслом расторопши".into(),
                    description: "Щадящий завтрак для разгрузочного дня.".into(),
                    ingredients: vec![
                        "Овсяные хлопья — 60 г".into(),
                        "Вода — 250 мл".into(),
                        "Масло расторопши — 1 ч. ложка".into(),
                        "Щепотка соли".into(),
                    ],
                    instructions: vec![
                        "Сварите овсянку на воде.".into(),
                        "Слегка остудите и добавьте масло перед подачей.".into(),
                    ],
                }],
            },
            Product {
                id: ProductId::new(11),
                slug: "almond".into(),
                name: "Масло миндаля".into(),
                name_en: "Almond Oil".into(),
                price: 1690,
                category: Category::Nuts,
                omega: vec!["Омега-9".into()],
                tags: vec!["Кожа и волосы".into(), "Женское здоровье".into()],
                benefits: vec![
                    "Питание кожи изнутри".into(),
                    "Мягкий сладковатый вкус".into(),
                    "Витамины A и E".into(),
                ],
                description: "Деликатное масло сладкого миндаля — любимец десертов и \
                    основа красоты кожи и волос."
                    .into(),
                composition: "100% масло ядер сладкого миндаля холодного отжима.".into(),
                usage: "Принимать по 1 чайной ложке в день.\n\
                    Добавлять в каши, творог и фруктовые салаты."
                    .into(),
                volume: "100 мл".into(),
                image: "/static/images/products/almond.svg".into(),
                recipes: vec![Recipe {
                    title: "Фруктовый салат с миндальным маслом".into(),
                    description: "Десерт без сахара.".into(),
                    ingredients: vec![
                        "Яблоко, груша, апельсин — по 1 шт.".into(),
                        "Масло миндаля — 1 ст. ложка".into(),
                        "Корица — щепотка".into(),
                    ],
                    instructions: vec![
                        "Нарежьте фрукты кубиком.".into(),
                        "Заправьте маслом, посыпьте корицей и перемешайте.".into(),
                    ],
                }],
            },
            Product {
                id: ProductId::new(12),
                slug: "hazelnut".into(),
                name: "Масло фундука".into(),
                name_en: "Hazelnut Oil".into(),
                price: 1590,
                category: Category::Nuts,
                omega: vec!["Омега-9".into()],
                tags: vec!["Сердце и сосуды".into(), "Кости и суставы".into()],
                benefits: vec![
                    "Поддержка сердца".into(),
                    "Калий и кальций".into(),
                    "Насыщенный ореховый вкус".into(),
                ],
                description: "Масло из обжаренного по щадящей технологии фундука с \
                    глубоким пралиновым ароматом."
                    .into(),
                composition: "100% масло ядер фундука холодного отжима.".into(),
                usage: "Принимать по 1 чайной ложке в день.\n\
                    Прекрасно в выпечке, десертах и с тёплыми сырами."
                    .into(),
                volume: "100 мл".into(),
                image: "/static/images/products/hazelnut.svg".into(),
                recipes: vec![Recipe {
                    title: "Запечённая тыква с маслом фундука".into(),
                    description: "Осенний гарнир с ореховой ноткой.".into(),
                    ingredients: vec![
                        "Тыква — 400 г".into(),
                        "Мёд — 1 ст. ложка".into(),
                        "Масло фундука — 1 ст. ложка".into(),
                        "Тимьян — пара веточек".into(),
                    ],
                    instructions: vec![
                        "Запеките ломтики тыквы с мёдом 25 минут при 180°C.".into(),
                        "Полейте маслом фундука и украсьте тимьяном.".into(),
                    ],
                }],
            },
            Product {
                id: ProductId::new(13),
                slug: "apricot".into(),
                name: "Масло абрикосовой косточки".into(),
                name_en: "Apricot Kernel Oil".into(),
                price: 1390,
                category: Category::Nuts,
                omega: vec!["Омега-6".into(), "Омега-9".into()],
                tags: vec!["Женское здоровье".into(), "Кожа и волосы".into()],
                benefits: vec![
                    "Нежный уход за кожей".into(),
                    "Лёгкий марципановый вкус".into(),
                    "Витамины B и F".into(),
                ],
                description: "Редкое масло из ядер абрикосовых косточек с тонким \
                    ароматом марципана."
                    .into(),
                composition: "100% масло ядер абрикосовых косточек холодного отжима.".into(),
                usage: "Принимать по 1 чайной ложке в день во время еды.\n\
                    Подходит для заправки десертов и творожных блюд."
                    .into(),
                volume: "100 мл".into(),
                image: "/static/images/products/apricot.svg".into(),
                recipes: vec![Recipe {
                    title: "Сырники с абрикосовым маслом".into(),
                    description: "Завтрак с марципановой ноткой.".into(),
                    ingredients: vec![
                        "Творог — 300 г".into(),
                        "Яйцо — 1 шт.".into(),
                        "Мука — 3 ст. ложки".into(),
                        "Масло абрикосовой косточки — 1 ст. ложка".into(),
                    ],
                    instructions: vec![
                        "Смешайте творог, яйцо и муку, сформируйте сырники.".into(),
                        "Обжарьте на сухой сковороде до румяности.".into(),
                        "Полейте маслом перед подачей.".into(),
                    ],
                }],
            },
        ])
    }
}
