// Lattice gradient and random-vector tables.
//
// Gradient tables hold a small set of directions repeated to fill a power of
// two, so a masked hash indexes them without a modulo. Random-vector tables
// hold 256 unit vectors drawn once from a fixed seed and frozen here; every
// platform reads the same bits.

// 128 two-component gradients: 24 directions 15 degrees apart (offset by
// 7.5 degrees from the axes) repeated five times, then 8 fill directions.
pub const GRADIENTS_2D: [f64; 256] = [
    0.1305261922200517, 0.9914448613738104,
    0.38268343236508984, 0.9238795325112867,
    0.6087614290087207, 0.7933533402912352,
    0.7933533402912352, 0.6087614290087207,
    0.9238795325112867, 0.3826834323650898,
    0.9914448613738104, 0.13052619222005157,
    0.9914448613738104, -0.13052619222005157,
    0.9238795325112867, -0.3826834323650898,
    0.7933533402912352, -0.6087614290087207,
    0.6087614290087207, -0.7933533402912352,
    0.38268343236508984, -0.9238795325112867,
    0.1305261922200517, -0.9914448613738104,
    -0.1305261922200516, -0.9914448613738104,
    -0.3826834323650897, -0.9238795325112867,
    -0.6087614290087207, -0.7933533402912352,
    -0.793353340291235, -0.6087614290087209,
    -0.9238795325112867, -0.3826834323650899,
    -0.9914448613738104, -0.13052619222005157,
    -0.9914448613738105, 0.13052619222005132,
    -0.9238795325112868, 0.38268343236508967,
    -0.7933533402912352, 0.6087614290087207,
    -0.6087614290087209, 0.7933533402912349,
    -0.3826834323650895, 0.9238795325112868,
    -0.13052619222005163, 0.9914448613738104,
    0.1305261922200517, 0.9914448613738104,
    0.38268343236508984, 0.9238795325112867,
    0.6087614290087207, 0.7933533402912352,
    0.7933533402912352, 0.6087614290087207,
    0.9238795325112867, 0.3826834323650898,
    0.9914448613738104, 0.13052619222005157,
    0.9914448613738104, -0.13052619222005157,
    0.9238795325112867, -0.3826834323650898,
    0.7933533402912352, -0.6087614290087207,
    0.6087614290087207, -0.7933533402912352,
    0.38268343236508984, -0.9238795325112867,
    0.1305261922200517, -0.9914448613738104,
    -0.1305261922200516, -0.9914448613738104,
    -0.3826834323650897, -0.9238795325112867,
    -0.6087614290087207, -0.7933533402912352,
    -0.793353340291235, -0.6087614290087209,
    -0.9238795325112867, -0.3826834323650899,
    -0.9914448613738104, -0.13052619222005157,
    -0.9914448613738105, 0.13052619222005132,
    -0.9238795325112868, 0.38268343236508967,
    -0.7933533402912352, 0.6087614290087207,
    -0.6087614290087209, 0.7933533402912349,
    -0.3826834323650895, 0.9238795325112868,
    -0.13052619222005163, 0.9914448613738104,
    0.1305261922200517, 0.9914448613738104,
    0.38268343236508984, 0.9238795325112867,
    0.6087614290087207, 0.7933533402912352,
    0.7933533402912352, 0.6087614290087207,
    0.9238795325112867, 0.3826834323650898,
    0.9914448613738104, 0.13052619222005157,
    0.9914448613738104, -0.13052619222005157,
    0.9238795325112867, -0.3826834323650898,
    0.7933533402912352, -0.6087614290087207,
    0.6087614290087207, -0.7933533402912352,
    0.38268343236508984, -0.9238795325112867,
    0.1305261922200517, -0.9914448613738104,
    -0.1305261922200516, -0.9914448613738104,
    -0.3826834323650897, -0.9238795325112867,
    -0.6087614290087207, -0.7933533402912352,
    -0.793353340291235, -0.6087614290087209,
    -0.9238795325112867, -0.3826834323650899,
    -0.9914448613738104, -0.13052619222005157,
    -0.9914448613738105, 0.13052619222005132,
    -0.9238795325112868, 0.38268343236508967,
    -0.7933533402912352, 0.6087614290087207,
    -0.6087614290087209, 0.7933533402912349,
    -0.3826834323650895, 0.9238795325112868,
    -0.13052619222005163, 0.9914448613738104,
    0.1305261922200517, 0.9914448613738104,
    0.38268343236508984, 0.9238795325112867,
    0.6087614290087207, 0.7933533402912352,
    0.7933533402912352, 0.6087614290087207,
    0.9238795325112867, 0.3826834323650898,
    0.9914448613738104, 0.13052619222005157,
    0.9914448613738104, -0.13052619222005157,
    0.9238795325112867, -0.3826834323650898,
    0.7933533402912352, -0.6087614290087207,
    0.6087614290087207, -0.7933533402912352,
    0.38268343236508984, -0.9238795325112867,
    0.1305261922200517, -0.9914448613738104,
    -0.1305261922200516, -0.9914448613738104,
    -0.3826834323650897, -0.9238795325112867,
    -0.6087614290087207, -0.7933533402912352,
    -0.793353340291235, -0.6087614290087209,
    -0.9238795325112867, -0.3826834323650899,
    -0.9914448613738104, -0.13052619222005157,
    -0.9914448613738105, 0.13052619222005132,
    -0.9238795325112868, 0.38268343236508967,
    -0.7933533402912352, 0.6087614290087207,
    -0.6087614290087209, 0.7933533402912349,
    -0.3826834323650895, 0.9238795325112868,
    -0.13052619222005163, 0.9914448613738104,
    0.1305261922200517, 0.9914448613738104,
    0.38268343236508984, 0.9238795325112867,
    0.6087614290087207, 0.7933533402912352,
    0.7933533402912352, 0.6087614290087207,
    0.9238795325112867, 0.3826834323650898,
    0.9914448613738104, 0.13052619222005157,
    0.9914448613738104, -0.13052619222005157,
    0.9238795325112867, -0.3826834323650898,
    0.7933533402912352, -0.6087614290087207,
    0.6087614290087207, -0.7933533402912352,
    0.38268343236508984, -0.9238795325112867,
    0.1305261922200517, -0.9914448613738104,
    -0.1305261922200516, -0.9914448613738104,
    -0.3826834323650897, -0.9238795325112867,
    -0.6087614290087207, -0.7933533402912352,
    -0.793353340291235, -0.6087614290087209,
    -0.9238795325112867, -0.3826834323650899,
    -0.9914448613738104, -0.13052619222005157,
    -0.9914448613738105, 0.13052619222005132,
    -0.9238795325112868, 0.38268343236508967,
    -0.7933533402912352, 0.6087614290087207,
    -0.6087614290087209, 0.7933533402912349,
    -0.3826834323650895, 0.9238795325112868,
    -0.13052619222005163, 0.9914448613738104,
    0.38268343236508984, 0.9238795325112867,
    0.9238795325112867, 0.3826834323650898,
    0.9238795325112867, -0.3826834323650898,
    0.38268343236508984, -0.9238795325112867,
    -0.3826834323650897, -0.9238795325112867,
    -0.9238795325112867, -0.3826834323650899,
    -0.9238795325112867, 0.3826834323650899,
    -0.3826834323650897, 0.9238795325112867,
];

// 64 four-component gradients (w = 0 padding): the 12 cube edge midpoints
// repeated five times, then 4 fill directions.
pub const GRADIENTS_3D: [f64; 256] = [
    0.0, 1.0, 1.0, 0.0,
    0.0, -1.0, 1.0, 0.0,
    0.0, 1.0, -1.0, 0.0,
    0.0, -1.0, -1.0, 0.0,
    1.0, 0.0, 1.0, 0.0,
    -1.0, 0.0, 1.0, 0.0,
    1.0, 0.0, -1.0, 0.0,
    -1.0, 0.0, -1.0, 0.0,
    1.0, 1.0, 0.0, 0.0,
    -1.0, 1.0, 0.0, 0.0,
    1.0, -1.0, 0.0, 0.0,
    -1.0, -1.0, 0.0, 0.0,
    0.0, 1.0, 1.0, 0.0,
    0.0, -1.0, 1.0, 0.0,
    0.0, 1.0, -1.0, 0.0,
    0.0, -1.0, -1.0, 0.0,
    1.0, 0.0, 1.0, 0.0,
    -1.0, 0.0, 1.0, 0.0,
    1.0, 0.0, -1.0, 0.0,
    -1.0, 0.0, -1.0, 0.0,
    1.0, 1.0, 0.0, 0.0,
    -1.0, 1.0, 0.0, 0.0,
    1.0, -1.0, 0.0, 0.0,
    -1.0, -1.0, 0.0, 0.0,
    0.0, 1.0, 1.0, 0.0,
    0.0, -1.0, 1.0, 0.0,
    0.0, 1.0, -1.0, 0.0,
    0.0, -1.0, -1.0, 0.0,
    1.0, 0.0, 1.0, 0.0,
    -1.0, 0.0, 1.0, 0.0,
    1.0, 0.0, -1.0, 0.0,
    -1.0, 0.0, -1.0, 0.0,
    1.0, 1.0, 0.0, 0.0,
    -1.0, 1.0, 0.0, 0.0,
    1.0, -1.0, 0.0, 0.0,
    -1.0, -1.0, 0.0, 0.0,
    0.0, 1.0, 1.0, 0.0,
    0.0, -1.0, 1.0, 0.0,
    0.0, 1.0, -1.0, 0.0,
    0.0, -1.0, -1.0, 0.0,
    1.0, 0.0, 1.0, 0.0,
    -1.0, 0.0, 1.0, 0.0,
    1.0, 0.0, -1.0, 0.0,
    -1.0, 0.0, -1.0, 0.0,
    1.0, 1.0, 0.0, 0.0,
    -1.0, 1.0, 0.0, 0.0,
    1.0, -1.0, 0.0, 0.0,
    -1.0, -1.0, 0.0, 0.0,
    0.0, 1.0, 1.0, 0.0,
    0.0, -1.0, 1.0, 0.0,
    0.0, 1.0, -1.0, 0.0,
    0.0, -1.0, -1.0, 0.0,
    1.0, 0.0, 1.0, 0.0,
    -1.0, 0.0, 1.0, 0.0,
    1.0, 0.0, -1.0, 0.0,
    -1.0, 0.0, -1.0, 0.0,
    1.0, 1.0, 0.0, 0.0,
    -1.0, 1.0, 0.0, 0.0,
    1.0, -1.0, 0.0, 0.0,
    -1.0, -1.0, 0.0, 0.0,
    1.0, 1.0, 0.0, 0.0,
    0.0, -1.0, 1.0, 0.0,
    -1.0, 1.0, 0.0, 0.0,
    0.0, -1.0, -1.0, 0.0,
];

// 256 unit vectors, two components each.
pub const RAND_VECS_2D: [f64; 512] = [
    0.958844170795885, -0.2839328373590341,
    0.5219710964759052, 0.8529631729704051,
    0.5067789373728222, -0.862076045738004,
    0.9933111596383223, -0.11546835123951284,
    -0.18051812551591173, -0.9835716579691698,
    0.9229418283428675, -0.3849394517260149,
    0.011091630588077333, -0.9999384859734611,
    0.5857470162606572, 0.8104939438032449,
    -0.5522596461363484, 0.8336721677310304,
    -0.19655504317974945, 0.9804927919167008,
    -0.8917638265597021, 0.45250113551194276,
    0.8711958818916683, 0.49093557151116923,
    -0.4222966956973413, -0.9064576663050002,
    -0.12773402621730717, 0.9918084585978869,
    -0.5058680791403284, 0.8626108546192045,
    -0.6795738148110831, 0.733607136158797,
    0.9872137397146996, -0.15940210826246123,
    0.5909152984313948, -0.8067336053987931,
    -0.9463023145488685, 0.3232830485494938,
    -0.26472421651549094, 0.9643241618824343,
    -0.27219770119054604, -0.962241347826304,
    0.831299926026566, -0.5558241025614361,
    -0.7237930390366594, -0.6900171277889244,
    -0.11824610537328353, -0.9929843193948484,
    0.29330691897577704, 0.9560183320841379,
    -0.9941154554833161, 0.10832571794915012,
    0.9051883100048647, 0.4250107333121565,
    0.21562147288143063, 0.9764770250407546,
    -0.49987022847910806, -0.8661003144441435,
    0.9624238626276586, -0.2715516684626662,
    0.9707547011911597, -0.24007355146967402,
    0.9972285857651519, -0.07439857345967735,
    0.8650295171114071, -0.5017209727787009,
    0.5083294132289656, 0.8611627068366904,
    0.3232071499442382, 0.9463282402131529,
    -0.5230049472092055, -0.852329645849947,
    0.22933937597855014, 0.9733465213508339,
    -0.6831691316469041, 0.7302601848415502,
    0.9289669864990315, -0.3701625831913703,
    -0.6828514691123632, 0.7305572333028312,
    0.9478664967122352, -0.3186677021765372,
    -0.9991842469911308, 0.04038366705447756,
    -0.8792877644006747, 0.4762909062487584,
    -0.5737121854259466, -0.8190569749985555,
    0.5010464050639751, -0.8654204180468975,
    0.03994401445605524, -0.9992019193882358,
    -0.8275403702001416, 0.56140621272748,
    -0.9826161823017076, -0.1856486958715776,
    0.8973060776964296, 0.4414088840622141,
    0.0613651939172029, -0.9981153805925966,
    0.33279721490087083, 0.9429984166233916,
    -0.7881371345695148, -0.6154996808387104,
    -0.27745437046076343, -0.9607388158663214,
    0.7736468999786377, 0.6336169774820145,
    -0.9956486829496927, 0.09318637314834441,
    0.05189975307139929, -0.9986522996674707,
    -0.9957463984964242, -0.0921363656836991,
    -0.8356865016665432, -0.5492067651917032,
    -0.5584353289373583, -0.8295480597256705,
    0.6540425038880491, -0.7564577999517562,
    0.5414008546554998, 0.8407646011686591,
    0.45035745172535374, 0.8928483441634675,
    -0.8598468672389732, 0.5105520197779297,
    -0.4571098855162676, -0.8894102273772799,
    -0.31543987854288313, 0.9489455637837458,
    -0.8510561982251903, 0.5250746113291764,
    0.7594166684545471, -0.6506045831942752,
    -0.4572978861247491, -0.8893135798726094,
    0.9473406101408717, 0.3202276820918532,
    0.5092342651394035, 0.8606279470293372,
    -0.8527543437765674, -0.5223121951191604,
    -0.9882106431149691, 0.1531003750299101,
    0.43392213972822746, 0.9009503741348225,
    0.16111022490065652, -0.9869364191438372,
    -0.9918897050116259, 0.12710158571768423,
    0.053156701615648595, -0.9985861830975556,
    0.4781513556768823, -0.8782774510736112,
    -0.08898233149009516, 0.9960332046084542,
    0.8212908910976952, -0.5705096600408742,
    -0.15576597841303377, 0.9877939866029911,
    -0.8369767024256499, 0.5472385216673669,
    -0.8100432380391416, -0.5863701497408123,
    -0.8320412864248516, 0.5547137078570152,
    -0.5958081678914031, -0.8031267814448038,
    0.901180566368216, 0.433443868107811,
    -0.4190673291197087, -0.907955160602369,
    -0.44644481152975146, 0.894811170168413,
    0.41853092930740865, 0.908202544156906,
    -0.49268994869366506, -0.8702049267018854,
    0.3614541975231397, 0.9323898664683691,
    0.994016150600045, -0.10923320166629084,
    0.6301547398040346, 0.7764695769329983,
    0.4840259928947591, 0.8750536201869247,
    0.9822422811870886, 0.18761689968759324,
    -0.9795074884794025, -0.20140774566230857,
    0.21991438885435904, -0.9755191754008804,
    0.6935750926912789, -0.7203843354753654,
    -0.29158382480393313, -0.9565452802208106,
    -0.9840664809374372, 0.17780090296567286,
    0.08309959837864732, 0.9965412468881093,
    0.8157784291628327, 0.5783645515698737,
    0.8984151796750898, 0.4391470880347224,
    0.4977646250065851, 0.8673121572375506,
    0.41532025643263715, 0.9096752632652646,
    0.5785459269193491, -0.8156498087077757,
    0.859232143338142, -0.5115858909846348,
    -0.3131412294999128, -0.9497065706771134,
    -0.883074491984279, 0.469232822388532,
    0.47040830035473774, -0.8824488829146802,
    -0.9479796795412802, -0.3183308454686911,
    -0.36555668078945147, 0.9307890809040462,
    0.2245710844716105, 0.9744577097130716,
    -0.8433759476751601, -0.5373239347758721,
    0.159950220497315, 0.9871250817210858,
    0.841940407189534, 0.5395705243446139,
    0.24178428013082104, -0.9703300273008254,
    0.9772261188413656, -0.2122006424454018,
    0.9672840266869475, -0.2536959040195263,
    -0.700982314008777, -0.7131786560511332,
    -0.20610880478789168, -0.9785290800936407,
    -0.3333115574459996, 0.9428167402379543,
    0.9999846958065961, -0.005532463519037933,
    -0.7943337914721642, 0.6074815451727371,
    0.029955666193884945, -0.9995512283334359,
    -0.8005154849218663, 0.5993120709616229,
    -0.5152615416980351, -0.8570329886573586,
    0.9912089398298854, -0.1323058487041085,
    0.28851646733286823, 0.9574749333939568,
    0.13359432561824763, -0.9910361023507699,
    -0.993633447159544, 0.11266131849859336,
    0.40451923333756046, 0.9145294909733597,
    0.418654882128422, -0.9081454121835539,
    -0.8414969653533835, 0.5402618414260315,
    0.9301290588211572, -0.3672328061822207,
    -0.9690741966581448, -0.24676953088128878,
    -0.5147861484074376, -0.8573186230380369,
    0.23246416107355253, 0.9726049628787473,
    -0.006723576101484942, -0.9999773965067448,
    0.9325829305909975, -0.36095578340055273,
    0.9250471255792516, -0.37985236007897105,
    0.7211217651200005, 0.6928083428122203,
    -0.1513117449100084, -0.9884860928977648,
    -0.6621465404672906, -0.7493743783631774,
    -0.9221009464309556, -0.38694940830958235,
    -0.9760380867236517, -0.21759975474442367,
    0.9990317491377912, 0.04399504761544491,
    -0.4510071959909604, -0.8925203130261918,
    -0.5301603118521893, 0.8478974252448167,
    -0.9370430963498695, 0.3492137391098024,
    0.3792723990981609, 0.9252850627143644,
    -0.9914395219975396, -0.13056674240131075,
    -0.47193459296508766, 0.8816335633146444,
    0.8509777065206022, -0.5252018116923587,
    0.8352813885818092, 0.5498227004124553,
    -0.7137509766298932, 0.7003995597941747,
    -0.03077099991897873, 0.9995264606622409,
    0.9990627996256487, 0.043284205019394666,
    -0.461101608398069, -0.8873473427766118,
    -0.5570321493405613, 0.830490929872828,
    -0.6151240837329711, -0.788430315000427,
    -0.5711945721379192, 0.8208146933140144,
    0.03305490766506833, -0.9994535372288468,
    0.997887206430006, -0.06497017195081639,
    0.9860102894242071, -0.16668445983231706,
    0.3061560618394149, 0.9519813368963598,
    0.8921509661866786, 0.45173737229963157,
    0.16062579249269435, 0.9870153771781339,
    -0.8841935412980916, -0.4671207354921638,
    0.560289193967365, -0.8282970597094985,
    -0.9985576724079607, -0.053689616083521866,
    -0.32697821672668675, 0.9450318755397809,
    -0.9638349086619751, -0.26650003535564915,
    0.9261845304432905, 0.37707057107064385,
    -0.9831354512937687, -0.18287887906862788,
    -0.9266311383292788, 0.3759717189877252,
    0.29158277767323926, 0.9565455994171728,
    -0.12707158037823177, -0.9918935494599098,
    0.6383570471605965, -0.7697403980176719,
    -0.5361840145190853, 0.8441011210596734,
    0.9730661303009034, -0.2305261504932257,
    0.8629856483431871, -0.5052284342291998,
    -0.47659935514326046, 0.8791206144079595,
    -0.13992141156506024, 0.9901626121933917,
    -0.5926985359924137, -0.8054243884018223,
    -0.794439751074771, 0.6073429689329216,
    0.10529230044279184, 0.994441316251223,
    0.8472194186403564, 0.5312431238883911,
    0.6892833803587728, -0.7244918367802244,
    0.444209683724118, 0.8959228520836596,
    -0.18987216888929023, -0.9818088202299249,
    -0.886935263744962, -0.4618937517716111,
    -0.1366324062073477, -0.9906218176347573,
    0.23778841030431774, 0.971316978089514,
    -0.4483420563293267, 0.8938620701911402,
    0.3413906595767573, -0.9399214954206264,
    -0.9643402907035756, 0.26466545623814064,
    0.9866532404893024, 0.16283544771320155,
    -0.4146653871555276, 0.9099739648446852,
    -0.4651795670302282, -0.8852163410249324,
    0.7344307683785604, -0.6786836129293806,
    -0.06439826405887192, 0.9979242774811142,
    -0.34341244446080804, -0.9391846958875834,
    0.9399190558616239, 0.3413973761296263,
    -0.7714939589552118, -0.6362366472434718,
    0.624714617710578, -0.7808531529159156,
    -0.401694833170686, 0.9157735861030142,
    0.984936361253124, -0.17291721800172358,
    -0.7576993470532695, -0.6526037844473851,
    0.5712893687537357, 0.8207487174214518,
    0.34198131218826855, -0.9397067532554984,
    -0.7756707805042713, -0.6311377347868645,
    0.99898326675221, -0.04508251045674813,
    -0.2826493389666145, 0.9592233062127588,
    0.16952307449621642, 0.9855262184302102,
    -0.9768058871131742, 0.21412673560544676,
    0.8600237229993167, 0.5102540503302199,
    0.5903448854398217, 0.8071511111527034,
    0.5292035672073736, -0.8484948935939396,
    0.8277189183070033, -0.5611429339096095,
    0.053939150863792626, -0.9985442243606905,
    -0.931439152831209, -0.3638971071238128,
    -0.9685343247731897, 0.24888001473831026,
    -0.9213284374573405, -0.3887851724698557,
    0.14916889158637192, 0.9888117322235276,
    0.32715586343694725, -0.944970391609613,
    -0.8566113676259899, -0.515962173859607,
    -0.7719477952427886, -0.6356859298582892,
    0.3499855858013542, -0.9367550852444213,
    -0.998366275982023, -0.057138244475894676,
    -0.4654522064456858, 0.8850730159228913,
    0.7052098449072394, -0.7089986422031479,
    0.36472260151702746, -0.9311162247231285,
    0.1609292633556206, 0.9869659427740236,
    0.3668773408313812, -0.930269324864845,
    -0.41416222669218017, -0.9102030817248287,
    0.19752058198262584, -0.9802987400243075,
    -0.8924843670176456, -0.4510783242731938,
    -0.9184580401552928, 0.3955184300056051,
    0.2813170047748723, -0.9596148929776437,
    0.42537606579224657, 0.9050166863937429,
    -0.47931928324829354, 0.8776406011040865,
    -0.46009502333715757, 0.8878696804713969,
    0.7842719197861815, -0.6204172433410416,
    -0.9666696273714903, 0.2560270132573202,
    0.17299501570047063, -0.9849226997804417,
    0.32376048130094975, -0.9461390757958247,
    0.9362838266691648, 0.3512443535741825,
    0.5693963690118183, 0.8220631210291319,
    0.926815464683777, 0.37551710270371774,
    -0.9992255717727507, -0.03934789340510462,
    -0.6609326995141818, 0.7504451790190249,
    -0.17847366178004048, 0.9839446895282395,
    -0.9671793160621669, 0.25409480628599834,
    -0.9811559789696228, -0.19321735152972433,
    0.27307985170396787, 0.9619913692925415,
    0.9761381610602129, 0.2171503868796599,
];

// 256 unit vectors, four components each (w = 0 padding).
pub const RAND_VECS_3D: [f64; 1024] = [
    -0.10291719295933523, 0.6422271557923027, -0.7595737829574558, 0.0,
    -0.4197334399764111, -0.8599053740518816, 0.29049369535716596, 0.0,
    -0.8584977924387682, -0.502397807249566, -0.10284932497877497, 0.0,
    -0.632336350455268, 0.760518868913934, 0.14751877819038128, 0.0,
    0.78083823510494, -0.2071321239373161, 0.5893962451792674, 0.0,
    -0.5123896322379351, 0.4068292507149029, 0.7562716612023912, 0.0,
    -0.12853174812780097, 0.9845973083723921, -0.11852312039873092, 0.0,
    0.6092958922868023, 0.47367863149074124, -0.6359143572144665, 0.0,
    0.3803214907243736, -0.38432351561825717, 0.8412199468842934, 0.0,
    -0.021952175572085217, 0.9871963405865128, -0.15799204764876662, 0.0,
    -0.23163061301711613, 0.3677358456932618, -0.9006206787019586, 0.0,
    -0.9052454105033382, -0.009691355798948972, 0.42477855923459806, 0.0,
    0.4620146298368076, 0.2408120218611313, 0.8535526064302725, 0.0,
    0.27621361059285954, -0.9475937963520921, -0.16053671990633833, 0.0,
    -0.4600472825962811, -0.5856072277085879, 0.6673984361917846, 0.0,
    -0.3197143523698603, -0.4558582789485145, 0.8306479172325776, 0.0,
    0.9458221357036287, -0.3246597176730299, 0.0040688245839652915, 0.0,
    0.9934568792803592, -0.08321063317209075, 0.07822671882182997, 0.0,
    0.7181934626682739, 0.49652410340502845, 0.4875058614195191, 0.0,
    0.2561750765744859, -0.9666052533166595, -0.006972402935342847, 0.0,
    -0.6194713555439699, -0.6049988766764379, -0.5002315452675536, 0.0,
    -0.006566214152729185, 0.3550114537226775, -0.9348388912306824, 0.0,
    0.23638893841764053, 0.9713121729190944, -0.02594094317807638, 0.0,
    0.5949346645456463, -0.6509938411558042, -0.47144433785885154, 0.0,
    -0.7601107683254871, 0.6497622699605122, 0.006372786784463624, 0.0,
    0.8370952750105041, 0.20327778743379946, -0.5078874301369427, 0.0,
    0.8592002467155422, -0.4861572627856144, 0.15945548559002454, 0.0,
    -0.3981510282349512, 0.5392810507066376, 0.7420590994416794, 0.0,
    0.41661379579584956, 0.6098272530497078, 0.6741985364789973, 0.0,
    0.765089959630296, -0.5576051685015876, -0.3220463161305036, 0.0,
    -0.4407360663064457, -0.6482913975662213, 0.6208622904464047, 0.0,
    0.632582364628606, -0.5200019289332091, -0.5739665023907086, 0.0,
    0.044062269043686646, 0.9975628198769044, 0.05410117231595413, 0.0,
    -0.5818773885602802, -0.7944454486848704, 0.17399751074703307, 0.0,
    0.5241864297792435, 0.34124940351240785, -0.7802419057175256, 0.0,
    -0.055338783253294284, 0.8469817516098886, -0.5287338947976477, 0.0,
    0.13490878602243045, -0.9043975580580281, 0.4048020212803165, 0.0,
    0.6454765154499016, -0.758301191743661, -0.0913201544172837, 0.0,
    -0.652846303921823, -0.7388293760821982, 0.16710133600185362, 0.0,
    0.010832519873322214, -0.9951164605573412, -0.09811160196951096, 0.0,
    -0.7978090445436865, -0.02300707963336455, -0.6024710804105322, 0.0,
    0.0170288272940713, 0.573561460893997, 0.8189855124592453, 0.0,
    -0.7944551720562028, -0.051240803339207545, 0.605157301588853, 0.0,
    -0.02836721588235357, 0.33248135965917625, -0.9426831103516544, 0.0,
    -0.8357350015396958, 0.547069031611065, 0.04756555322474498, 0.0,
    0.618822508700289, 0.6224690734090389, 0.47915650405183197, 0.0,
    0.4921669677202362, -0.3201204651295206, 0.8095026644121237, 0.0,
    -0.5246431127382843, -0.4573829566790494, 0.7180184086747461, 0.0,
    -0.7183595193584033, -0.6839194372031605, -0.12733343772503858, 0.0,
    0.6813487672061395, -0.4458491400317086, -0.5805018533645347, 0.0,
    -0.22919848564467732, -0.0900530612196519, -0.9692050868330997, 0.0,
    0.7832909203706335, 0.48871949417915306, 0.38419863361833895, 0.0,
    -0.768115456120067, -0.49493203047569, -0.4062523000287779, 0.0,
    -0.5314600379992315, 0.5724242389843482, -0.6244042910110765, 0.0,
    -0.8109115912156186, -0.24049705917906253, 0.5334637342485204, 0.0,
    0.7320671727171889, -0.577717515309438, -0.3609987910430599, 0.0,
    0.3336714645361735, 0.8375555984949165, 0.4326245175485406, 0.0,
    0.6356396684954982, -0.27117892653605896, -0.7227891820148415, 0.0,
    -0.35882780434654793, 0.9208678882561769, 0.15246291092080244, 0.0,
    -0.04896559971617151, -0.6851004261465922, 0.726801056781148, 0.0,
    0.6274882816848236, -0.777995175855664, -0.031336283977875246, 0.0,
    -0.6812395900609923, 0.7193756545437225, 0.1356882035525635, 0.0,
    -0.6466774899407002, 0.7559216079817588, 0.10193501160184293, 0.0,
    -0.0031630086236058845, -0.5018472921768875, 0.8649504556396121, 0.0,
    -0.20667636912115173, 0.8326913244397685, 0.5137217502205271, 0.0,
    -0.6789461868493404, 0.645958189785257, 0.34895571697866545, 0.0,
    0.20499678031620527, -0.23206982752943184, 0.9508522047145125, 0.0,
    -0.4825662881487935, -0.5334535042268945, 0.6946633259143182, 0.0,
    0.7288748093735379, -0.6598622571879471, -0.1825467441493176, 0.0,
    0.14857458810630267, -0.9728390889265749, 0.17750971473571275, 0.0,
    -0.4523125639287299, -0.3572489330661763, -0.8171820753879133, 0.0,
    -0.48872589721141546, 0.41637149385019795, -0.766669274527062, 0.0,
    0.7178841968406288, 0.6325891287691628, 0.2906428634760485, 0.0,
    0.9603020323206969, 0.27083183583432946, 0.0668589815907048, 0.0,
    0.9231490083141417, 0.19018660847871197, -0.3341032211816908, 0.0,
    0.08460290089563269, -0.9825167431712589, 0.16584088322300405, 0.0,
    -0.8579636633753837, 0.4547184207428046, 0.2390178030286889, 0.0,
    0.05503864481067404, 0.4715355209324787, 0.8801278316678438, 0.0,
    0.43262662674354135, -0.8996858857807347, -0.058305306443233285, 0.0,
    -0.19840906838361397, 0.670745901632594, -0.7146564048731565, 0.0,
    0.11212901023464598, 0.4743335443607804, 0.873175110592336, 0.0,
    0.3765364947198031, 0.38664823921848, -0.8418571180748979, 0.0,
    -0.7782056148005272, -0.15539446044299987, -0.6084805524883785, 0.0,
    0.6770582469527195, -0.622905684553221, 0.39189365698438317, 0.0,
    -0.16184550252203858, -0.8412218009001171, -0.5158991325867417, 0.0,
    0.10326984084722689, -0.8787527438492821, -0.4659709810157133, 0.0,
    -0.6235182716353829, 0.5182383035475066, 0.5853665737578695, 0.0,
    -0.41264537777715693, 0.9105651454239135, -0.024390738780829313, 0.0,
    -0.7903855368158341, -0.5071877983543921, -0.3435858559265359, 0.0,
    -0.5504376930469926, -0.8229609410008368, -0.14054762772854668, 0.0,
    -0.6052011014696018, -0.667178786482724, -0.4342857281185055, 0.0,
    -0.6787297280834607, -0.4046347422705467, -0.6128594305086605, 0.0,
    0.507272116851766, -0.7045153292571879, -0.4963196049990011, 0.0,
    -0.8143036147021144, 0.14751032841827164, 0.5613825131699455, 0.0,
    -0.9268820161202416, -0.26464431971193225, -0.2661824792075631, 0.0,
    0.03273319759231754, 0.9562782015687165, 0.2906209541307774, 0.0,
    0.5956588811335897, 0.3181720010084901, 0.7375344568906144, 0.0,
    0.3037730509600622, 0.2919813844287709, -0.9069006586487154, 0.0,
    0.678609325344779, 0.46304547605438284, -0.5701563563275198, 0.0,
    -0.26385191969974486, -0.8302201563089373, -0.4910363087686316, 0.0,
    0.7564862572063419, 0.5908343158725146, 0.280434223741322, 0.0,
    -0.028259427463981426, 0.25684748649635747, 0.9660387018333745, 0.0,
    -0.17326532912586057, 0.8932827355722902, 0.4147590626513098, 0.0,
    0.48168464410916334, 0.6034440985963523, 0.6354802306119873, 0.0,
    -0.41891557305367416, -0.7158377825128385, 0.5586465893391044, 0.0,
    -0.4919068407340401, -0.15709435684453438, -0.8563579993709745, 0.0,
    0.47807715005765117, 0.8729688919182028, 0.0967861164416639, 0.0,
    0.08587526775979361, 0.8999902621307893, -0.42736748408943925, 0.0,
    0.921351202619296, 0.388619105855746, 0.009335523330664008, 0.0,
    -0.017020389746090103, 0.9955166366785152, 0.09304263769470666, 0.0,
    -0.27520519566449564, -0.6220236006748706, -0.733040749537661, 0.0,
    -0.7595137281674055, -0.5008196133618185, 0.41511276973536626, 0.0,
    -0.6358704523969454, 0.05653854828800556, -0.7697221318930545, 0.0,
    0.2499789406319293, 0.8477380324568006, 0.4678148753158784, 0.0,
    -0.4314437791577437, -0.33817017629363183, 0.8363594904654446, 0.0,
    0.9342332207930051, 0.3566611391751451, 0.0010587582423713382, 0.0,
    0.6944425348925718, 0.5036246376601893, 0.5139180772006589, 0.0,
    0.25820857779816353, -0.07395016594807703, -0.9632547447626207, 0.0,
    -0.19781081656434055, 0.8423292964604617, -0.5013504135577953, 0.0,
    -0.5409970237294508, 0.665989296548272, 0.5135956358839258, 0.0,
    0.5343844532615192, 0.5861635192048489, 0.6089709228409628, 0.0,
    0.6172243222961231, -0.010316529842468064, -0.7867195848446262, 0.0,
    -0.35693220501612877, 0.4417861631635111, 0.8230579487858602, 0.0,
    0.13573800034130146, -0.9762325550937394, -0.16895322914491406, 0.0,
    -0.7439465537514844, -0.12556934591850522, -0.6563351769689694, 0.0,
    -0.047646353930642114, -0.6758016605646969, 0.7355419366257197, 0.0,
    -0.0021101322035535887, 0.9010997369030421, 0.4336067475205523, 0.0,
    -0.0071860541909462665, 0.41754828486474205, -0.9086263205695051, 0.0,
    0.4791824321908631, 0.3178396991337559, 0.8181455386019119, 0.0,
    -0.8980632710153631, 0.04628091279233698, -0.4374247802357505, 0.0,
    0.7799039521141654, -0.346352576500668, -0.5213345549913746, 0.0,
    0.9206578341317406, -0.3443324802509777, 0.1839138262775868, 0.0,
    -0.38690620158700145, -0.7093789158591433, 0.5891393255487407, 0.0,
    0.229164066685706, -0.2499851764596083, 0.9407397313234558, 0.0,
    -0.5463369114657711, 0.27761828131404104, 0.7902177352162378, 0.0,
    -0.9191324132280838, 0.20734482597265036, 0.33496825237011696, 0.0,
    -0.3546319886864936, -0.36505345440353976, 0.8607973791946077, 0.0,
    -0.6006480853445108, 0.7984570909762174, -0.04108712014451488, 0.0,
    0.8514380585754953, -0.5063814762801254, -0.13649554164716227, 0.0,
    0.7309862415442646, -0.3435056314153667, -0.5896295412027115, 0.0,
    0.9928304466566349, -0.07682368960243124, -0.09157414977741385, 0.0,
    0.115529249426031, -0.9131536804573667, 0.3909006886591826, 0.0,
    -0.45801379958423344, -0.1286738334243951, 0.8795830853207016, 0.0,
    -0.016490674824624324, 0.016596680584424726, -0.9997262664536763, 0.0,
    0.20555957106327208, -0.32085541112735716, 0.9245523608182384, 0.0,
    0.1872946077178673, 0.1306660334464462, -0.9735744027156745, 0.0,
    -0.15101394664294815, -0.000979357181886893, -0.9885311470959481, 0.0,
    -0.30923772413319056, -0.010493511734287017, 0.9509268721539039, 0.0,
    -0.9907830040904173, -0.020575898649635976, -0.13388678501005247, 0.0,
    -0.3376896992917915, -0.8265057740518761, 0.4503930199849111, 0.0,
    0.895439348710968, -0.340514989713808, -0.28677153722132687, 0.0,
    0.3700469054480233, -0.49109488746523433, 0.7886007223391636, 0.0,
    -0.8691794156173585, 0.19783551099711047, 0.4531978089704092, 0.0,
    0.4108198066301166, 0.3479544951289917, 0.8427068029866154, 0.0,
    0.655002363280873, 0.5985957810420138, 0.461145307918418, 0.0,
    0.45898351120868514, -0.7977332739893864, -0.3910955893496131, 0.0,
    0.4524381968321422, 0.6328124583258543, 0.628369374361027, 0.0,
    -0.3461233082312333, 0.17828118647381982, 0.9210941721933505, 0.0,
    -0.2647387340662538, -0.14799381823745308, -0.9528962338305766, 0.0,
    -0.7521338184679784, 0.5647267869147857, -0.3396739249010441, 0.0,
    0.9510593772132052, 0.041307111884020455, -0.3062348502744767, 0.0,
    -0.33773705541202187, -0.5112947106804492, 0.7902603369977597, 0.0,
    -0.9388388978260541, -0.2767736189714902, 0.2048850598998968, 0.0,
    0.7553753193470052, -0.05420482931669678, -0.653046677811133, 0.0,
    -0.1870191139640863, 0.2640186782146557, -0.9462124436752426, 0.0,
    -0.8555419231461497, -0.4950671899528174, 0.1515140098195833, 0.0,
    0.2882155330952268, 0.8854948417417042, -0.3644594514228827, 0.0,
    -0.19244533646614126, -0.4464908942381885, 0.8738481983930713, 0.0,
    0.857462103090936, -0.0681227501067389, 0.5100176787923765, 0.0,
    -0.5811153973964416, -0.6304166837260059, -0.5146646478909163, 0.0,
    0.7017833597038532, -0.5597656797341465, 0.4406387407327472, 0.0,
    -0.035465347472460725, 0.03902971316708513, -0.9986084771414434, 0.0,
    0.8797576432548632, -0.1787579675665985, 0.4405361258354503, 0.0,
    0.8843601528262249, -0.2784792387289833, 0.3746417404535993, 0.0,
    -0.4994736743417824, 0.5263340056503174, 0.6881123186919493, 0.0,
    0.5702279667485803, 0.23017833785291886, 0.7885797351701649, 0.0,
    -0.7450382052230924, 0.4473357429158323, 0.49478157389690014, 0.0,
    0.2607676543096174, 0.5734109176259026, -0.7766596101338605, 0.0,
    0.9980853457927532, 0.051306435989496024, -0.0345440608472114, 0.0,
    0.5886364512345126, -0.8013861804803512, 0.10624179033296266, 0.0,
    -0.3697744706675534, -0.5432241169737184, 0.7537734404850402, 0.0,
    0.20297368852120715, 0.19804573589942362, 0.9589471144229758, 0.0,
    -0.07075981317936265, -0.47774934310921646, 0.8756418297440649, 0.0,
    -0.28337413003764966, -0.0594061695538974, 0.9571677018393061, 0.0,
    0.8896925677937403, -0.4277300883077731, -0.15966873948524052, 0.0,
    0.742366681618973, 0.32096959092135763, 0.5881073301071928, 0.0,
    -0.41368197381201166, 0.09587555575742679, 0.9053591013245532, 0.0,
    0.8365013407481267, 0.282999104963501, 0.4692302350834223, 0.0,
    -0.5705480467416579, -0.7265926547179928, 0.38280287416520076, 0.0,
    -0.2708242252037282, -0.5348503940725685, -0.8003682246336485, 0.0,
    -0.9826656547233872, -0.0005653399468031017, -0.18538579076563888, 0.0,
    -0.6584539979426302, 0.49632077184403744, -0.5657773625990223, 0.0,
    0.9824530432417781, 0.07468422527031215, -0.17090431334738754, 0.0,
    -0.03922152947286365, 0.4509394943092427, -0.8916923483455119, 0.0,
    0.141385135774772, -0.9180543142643827, -0.3703869860598552, 0.0,
    0.3335994481031965, 0.342072342954003, -0.8784633859252198, 0.0,
    0.5903622793136929, -0.42022366287199886, 0.6891186054127272, 0.0,
    -0.41020703732736197, 0.49983325286391794, -0.7628216736948308, 0.0,
    0.5582946115220735, 0.621208969060682, 0.5499150329859894, 0.0,
    0.05370119687569161, 0.1924565912583933, 0.9798350075065281, 0.0,
    -0.9964018524521261, 0.07702971707234145, 0.03535210202698935, 0.0,
    0.9616048645093578, -0.2727212347614228, 0.030646576679044246, 0.0,
    -0.1060381080754967, 0.3985989466961615, 0.910974642527705, 0.0,
    -0.9455771576397856, -0.19908191274966197, 0.25739120219191625, 0.0,
    -0.11988913058972671, 0.7516209379822535, 0.6486081729003397, 0.0,
    -0.9154317894845257, -0.2565549726089178, 0.3101035066405995, 0.0,
    0.6776416229000966, -0.7256121236717481, -0.11953609034052981, 0.0,
    -0.5013606960133439, 0.7487091210393556, -0.43367280819241016, 0.0,
    0.6609791947648749, -0.739990895811025, -0.12457920454383475, 0.0,
    -0.26132707586951226, -0.12602552453447927, 0.9569878403528957, 0.0,
    0.7657019799271895, -0.15930958071803403, 0.6231540222344925, 0.0,
    0.09894234319175493, -0.7236128161453468, -0.683077524907624, 0.0,
    0.20616712272085277, -0.6995558758823132, -0.6841905392707024, 0.0,
    0.25269078538164785, 0.026381713567601855, -0.9671873511230609, 0.0,
    0.8439103552568002, 0.4162911105848827, -0.33840363996024947, 0.0,
    -0.796994780400865, 0.49691786535275784, -0.34332485361103027, 0.0,
    -0.6137787397517364, -0.28387502408372783, -0.7366753893881846, 0.0,
    -0.433648213966532, 0.62081076559144, -0.6531027636210147, 0.0,
    -0.2709901286628858, 0.9587786280558815, 0.08548621263428502, 0.0,
    0.08544240994285308, -0.8891521459648926, -0.44956429563432154, 0.0,
    0.8430012834134887, -0.46754317042964677, -0.2659928945438301, 0.0,
    0.9750310790521516, 0.014704823359079753, -0.2215810530085438, 0.0,
    -0.9624912166879417, 0.20023019564777295, 0.18308065585806776, 0.0,
    0.5207637533760474, 0.8417415115060424, -0.14239501738900295, 0.0,
    0.35488906637908146, 0.5003943270545066, 0.7897210064423077, 0.0,
    -0.2301971922265261, -0.1511401192124286, -0.961335486214608, 0.0,
    -0.8904348700707022, 0.26518401634462435, -0.36986913853078573, 0.0,
    -0.10046343372451128, 0.5356275036339467, -0.8384570804967582, 0.0,
    -0.85148590844091, -0.46803457368128737, -0.2364643431165343, 0.0,
    0.19935311337175687, 0.9000453569227932, 0.3875263754516707, 0.0,
    -0.22200070696298752, 0.49383810231412395, 0.8407375421680172, 0.0,
    0.23247883998322927, 0.4368921273851007, -0.8689527363378131, 0.0,
    -0.2086415219058998, 0.25158779808903425, -0.9450779307493649, 0.0,
    -0.27270830594002893, -0.20453233440761676, 0.9401046239930375, 0.0,
    0.9325393211722969, -0.2947798013718356, -0.20850727366375676, 0.0,
    -0.23582882184774973, 0.9465886412796951, -0.219897046333422, 0.0,
    0.10951953054382549, -0.09523600300008155, 0.9894117323753688, 0.0,
    -0.5047454994594668, -0.15792293869910812, 0.8487003748131912, 0.0,
    -0.1714838463963568, -0.5565409772648285, -0.8129301513969207, 0.0,
    0.8612799299247654, 0.5068346119565803, 0.0362706276705238, 0.0,
    -0.15339811066530598, 0.21824892636633067, 0.9637616021528657, 0.0,
    -0.551974782189308, 0.3566822008629426, 0.7537251802975893, 0.0,
    -0.2401314099997323, -0.24511818598350038, 0.939283759484693, 0.0,
    -0.15552986752139022, -0.7185848506938495, 0.6778246621819517, 0.0,
    0.5174142834992226, 0.34104963859379567, -0.7848360358992363, 0.0,
    0.038095657786259604, -0.9954941170010986, -0.08683423215550001, 0.0,
    0.9851559153454488, 0.17147123682152815, -0.008089338833696669, 0.0,
    0.698550538534846, 0.6987586923845431, -0.15415393257948362, 0.0,
    -0.6906958137230577, 0.30875573990759625, -0.6539183328058298, 0.0,
    0.4976680507353997, -0.5966770695950244, -0.6295260009695565, 0.0,
    0.09018737997528649, 0.9951014664498568, -0.04048836823753055, 0.0,
    -0.33546038248354193, -0.9420496559647865, 0.0029626813232408455, 0.0,
    -0.27390878423855297, -0.7482737090122863, -0.6042023124069902, 0.0,
    -0.7858034011470324, -0.49251540576989583, -0.37408767665491327, 0.0,
    -0.8560991270957982, 0.346359598555287, -0.3835743905351776, 0.0,
    0.04125141479395968, -0.7985938265381287, 0.600455011630918, 0.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradients_2d_are_unit_length() {
        for g in GRADIENTS_2D.chunks_exact(2) {
            let len = (g[0] * g[0] + g[1] * g[1]).sqrt();
            assert!((len - 1.0).abs() < 1e-12, "gradient {g:?} has length {len}");
        }
    }

    #[test]
    fn gradients_3d_lie_on_cube_edges() {
        for g in GRADIENTS_3D.chunks_exact(4) {
            let zeros = g[..3].iter().filter(|c| **c == 0.0).count();
            assert_eq!(zeros, 1, "gradient {g:?}");
            assert_eq!(g[3], 0.0);
        }
    }

    #[test]
    fn random_vectors_are_unit_length() {
        for v in RAND_VECS_2D.chunks_exact(2) {
            let len = (v[0] * v[0] + v[1] * v[1]).sqrt();
            assert!((len - 1.0).abs() < 1e-9);
        }
        for v in RAND_VECS_3D.chunks_exact(4) {
            let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-9);
            assert_eq!(v[3], 0.0);
        }
    }
}
